//! Marking report types with text, markdown and JSON output.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::assessment::Assessment;
use crate::statistics::TraineeSummary;
use crate::trainee::Trainee;

/// The outcome of marking one quiz.
#[derive(Debug, Clone, Serialize)]
pub struct MarkingReport {
    /// Name of the marked quiz.
    pub quiz_name: String,
    /// Raw type tag of the quiz.
    pub quiz_type: String,
    /// Number of questions in the quiz.
    pub total_questions: usize,
    /// Number of correctly answered questions.
    pub correct_answers: usize,
    /// Rounded percentage of correct answers.
    pub percentage: u32,
    /// Per-question results, in quiz order.
    pub outcomes: Vec<QuestionOutcome>,
    /// The generated assessment, if the quiz type was valid.
    pub assessment: Option<Assessment>,
    /// Why no assessment could be generated.
    pub error: Option<String>,
}

/// Result for a single question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutcome {
    pub question: String,
    pub chosen_answer: String,
    pub correct_answer: String,
    pub correct: bool,
}

impl MarkingReport {
    /// Returns true if an assessment was generated.
    pub fn is_success(&self) -> bool {
        self.assessment.is_some()
    }

    /// The weighted score of the generated assessment.
    pub fn weighted_score(&self) -> Option<f64> {
        self.assessment.as_ref().map(Assessment::calculate_score)
    }

    /// Plain text summary, one fact per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Quiz: {} ({})\n", self.quiz_name, self.quiz_type));
        out.push_str(&format!(
            "Correct: {}/{}\n",
            self.correct_answers, self.total_questions
        ));
        out.push_str(&format!("Percentage: {}%\n", self.percentage));
        match (&self.assessment, &self.error) {
            (Some(a), _) => {
                out.push_str(&format!("Generated type: {}\n", a.kind()));
                out.push_str(&format!("Weighted score: {}\n", a.calculate_score()));
            }
            (None, Some(e)) => out.push_str(&format!("No assessment: {e}\n")),
            (None, None) => {}
        }
        out
    }

    /// Format the per-question outcomes as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**{}** ({}): {}/{} correct, {}%\n\n",
            self.quiz_name,
            self.quiz_type,
            self.correct_answers,
            self.total_questions,
            self.percentage
        ));

        if !self.outcomes.is_empty() {
            md.push_str("| # | Question | Chosen | Correct | Result |\n");
            md.push_str("|---|----------|--------|---------|--------|\n");
            for (i, o) in self.outcomes.iter().enumerate() {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    i + 1,
                    escape_cell(&o.question),
                    escape_cell(&o.chosen_answer),
                    escape_cell(&o.correct_answer),
                    if o.correct { "ok" } else { "wrong" }
                ));
            }
            md.push('\n');
        }

        if let Some(score) = self.weighted_score() {
            md.push_str(&format!("**Weighted score:** {score}\n"));
        } else if let Some(e) = &self.error {
            md.push_str(&format!("**No assessment:** {e}\n"));
        }

        md
    }
}

/// Every marked quiz from one run, plus the trainee the assessments were
/// recorded against.
#[derive(Debug, Clone, Serialize)]
pub struct MarkingSession {
    pub reports: Vec<MarkingReport>,
    pub trainee: Option<Trainee>,
    pub summary: Option<TraineeSummary>,
}

impl MarkingSession {
    /// Record each generated assessment on `trainee`, in report order.
    pub fn new(reports: Vec<MarkingReport>, mut trainee: Option<Trainee>) -> Self {
        if let Some(trainee) = trainee.as_mut() {
            for assessment in reports.iter().filter_map(|r| r.assessment.clone()) {
                trainee.add_assessment(assessment);
            }
        }
        let summary = trainee.as_ref().map(TraineeSummary::compute);
        Self {
            reports,
            trainee,
            summary,
        }
    }

    /// Names of quizzes that produced no assessment.
    pub fn failed(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| !r.is_success())
            .map(|r| r.quiz_name.as_str())
            .collect()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize marking session")
    }

    /// Each report's markdown, followed by the trainee's assessment table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        for report in &self.reports {
            md.push_str(&report.to_markdown());
            md.push('\n');
        }

        if let (Some(trainee), Some(summary)) = (&self.trainee, &self.summary) {
            md.push_str(&format!(
                "### Trainee: {} <{}>\n\n",
                escape_cell(&trainee.name),
                trainee.email
            ));
            md.push_str("| Assessment | Type | Score | Weighted |\n");
            md.push_str("|------------|------|-------|----------|\n");
            for a in trainee.assessments() {
                md.push_str(&format!(
                    "| {} | {} | {:.1} | {:.1} |\n",
                    escape_cell(a.name()),
                    a.kind(),
                    a.score(),
                    a.calculate_score()
                ));
            }
            if let Some(mean) = summary.mean_weighted_score {
                md.push_str(&format!("\n**Mean weighted score:** {mean:.1}\n"));
            }
        }

        md
    }
}

/// Pipes would otherwise end the table cell early.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
