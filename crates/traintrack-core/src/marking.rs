//! Quiz marking: percentage of correct answers, then a typed assessment.

use crate::assessment::{Assessment, AssessmentKind};
use crate::error::AssessmentError;
use crate::quiz::Quiz;
use crate::report::{MarkingReport, QuestionOutcome};

/// Marks a borrowed quiz.
///
/// Nothing is snapshotted: a `Marking` built after the quiz's answers change
/// sees the new answers.
#[derive(Debug, Clone, Copy)]
pub struct Marking<'a> {
    quiz: &'a Quiz,
}

impl<'a> Marking<'a> {
    pub fn new(quiz: &'a Quiz) -> Self {
        Self { quiz }
    }

    /// Number of correctly answered questions.
    pub fn correct_count(&self) -> usize {
        self.quiz.questions().iter().filter(|q| q.is_correct()).count()
    }

    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    /// Percentage of correct answers, rounded to a whole number.
    ///
    /// Ties round to even: 12.5 gives 12, 37.5 gives 38. An empty quiz
    /// scores 0.
    pub fn mark(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let percentage = (self.correct_count() as f64 / total as f64) * 100.0;
        percentage.round_ties_even() as u32
    }

    /// Turn the mark into an assessment named after the quiz.
    ///
    /// Known type tags give the matching weighted assessment. Anything else
    /// goes through the base constructor, which rejects the tag.
    pub fn generate_assessment(&self) -> Result<Assessment, AssessmentError> {
        let score = f64::from(self.mark());
        let name = self.quiz.name();

        let assessment = match self.quiz.kind() {
            "multiple-choice" => Assessment::weighted(name, AssessmentKind::MultipleChoice, score),
            "technical" => Assessment::weighted(name, AssessmentKind::Technical, score),
            "presentation" => Assessment::weighted(name, AssessmentKind::Presentation, score),
            other => Assessment::new(name, other, score),
        };

        match &assessment {
            Ok(a) => tracing::debug!(
                quiz = name,
                kind = %a.kind(),
                score,
                weighted = a.calculate_score(),
                "generated assessment"
            ),
            Err(e) => tracing::debug!(quiz = name, error = %e, "assessment generation failed"),
        }

        assessment
    }

    /// Mark the quiz and collect per-question outcomes alongside the
    /// generated assessment (or the reason it could not be generated).
    pub fn report(&self) -> MarkingReport {
        let outcomes = self
            .quiz
            .questions()
            .iter()
            .map(|q| QuestionOutcome {
                question: q.text.clone(),
                chosen_answer: q.chosen_answer.clone(),
                correct_answer: q.correct_answer.clone(),
                correct: q.is_correct(),
            })
            .collect();

        let (assessment, error) = match self.generate_assessment() {
            Ok(a) => (Some(a), None),
            Err(e) => (None, Some(e.to_string())),
        };

        MarkingReport {
            quiz_name: self.quiz.name().to_string(),
            quiz_type: self.quiz.kind().to_string(),
            total_questions: self.total(),
            correct_answers: self.correct_count(),
            percentage: self.mark(),
            outcomes,
            assessment,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Weighting;
    use crate::quiz::Question;

    fn quiz_with(correct: usize, total: usize, kind: &str) -> Quiz {
        let questions = (0..total)
            .map(|i| {
                let chosen = if i < correct { "A" } else { "B" };
                Question::new(format!("Q{i}"), chosen, "A")
            })
            .collect();
        Quiz::new(questions, "Maths Quiz", kind)
    }

    #[test]
    fn empty_quiz_marks_zero() {
        let quiz = Quiz::new(Vec::new(), "Empty", "technical");
        assert_eq!(Marking::new(&quiz).mark(), 0);
    }

    #[test]
    fn basic_percentages() {
        assert_eq!(Marking::new(&quiz_with(3, 5, "technical")).mark(), 60);
        assert_eq!(Marking::new(&quiz_with(1, 3, "technical")).mark(), 33);
        assert_eq!(Marking::new(&quiz_with(2, 3, "technical")).mark(), 67);
        assert_eq!(Marking::new(&quiz_with(5, 5, "technical")).mark(), 100);
        assert_eq!(Marking::new(&quiz_with(0, 5, "technical")).mark(), 0);
    }

    #[test]
    fn half_percentages_round_to_even() {
        assert_eq!(Marking::new(&quiz_with(1, 8, "technical")).mark(), 12);
        assert_eq!(Marking::new(&quiz_with(3, 8, "technical")).mark(), 38);
        assert_eq!(Marking::new(&quiz_with(5, 8, "technical")).mark(), 62);
        assert_eq!(Marking::new(&quiz_with(7, 8, "technical")).mark(), 88);
    }

    #[test]
    fn technical_quiz_generates_full_weight() {
        let quiz = quiz_with(4, 5, "technical");
        let a = Marking::new(&quiz).generate_assessment().unwrap();
        assert_eq!(a.kind(), AssessmentKind::Technical);
        assert_eq!(a.weighting(), Weighting::ByKind);
        assert_eq!(a.name(), "Maths Quiz");
        assert!((a.calculate_score() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn multiple_choice_quiz_is_weighted() {
        let quiz = quiz_with(4, 5, "multiple-choice");
        let a = Marking::new(&quiz).generate_assessment().unwrap();
        assert_eq!(a.kind(), AssessmentKind::MultipleChoice);
        assert!((a.score() - 80.0).abs() < 1e-9);
        assert!((a.calculate_score() - 56.0).abs() < 1e-9);
    }

    #[test]
    fn presentation_quiz_is_weighted() {
        let quiz = quiz_with(5, 5, "presentation");
        let a = Marking::new(&quiz).generate_assessment().unwrap();
        assert_eq!(a.kind(), AssessmentKind::Presentation);
        assert!((a.calculate_score() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_quiz_type_fails_at_generation() {
        let quiz = quiz_with(2, 4, "essay");
        let marking = Marking::new(&quiz);
        assert_eq!(marking.mark(), 50);
        assert_eq!(
            marking.generate_assessment().unwrap_err(),
            AssessmentError::InvalidType("essay".into())
        );
    }

    #[test]
    fn marking_sees_updated_answers() {
        let mut quiz = quiz_with(1, 2, "technical");
        assert_eq!(Marking::new(&quiz).mark(), 50);
        quiz.questions_mut()[1].update_answer("A");
        assert_eq!(Marking::new(&quiz).mark(), 100);
        quiz.add_question(Question::new("extra", "B", "A")).unwrap();
        assert_eq!(Marking::new(&quiz).mark(), 67);
    }

    #[test]
    fn report_records_outcomes_and_errors() {
        let quiz = quiz_with(3, 5, "multiple-choice");
        let report = Marking::new(&quiz).report();
        assert_eq!(report.total_questions, 5);
        assert_eq!(report.correct_answers, 3);
        assert_eq!(report.percentage, 60);
        assert_eq!(report.outcomes.iter().filter(|o| o.correct).count(), 3);
        assert!(report.assessment.is_some());
        assert!(report.error.is_none());

        let bad = quiz_with(1, 1, "oral");
        let report = Marking::new(&bad).report();
        assert!(report.assessment.is_none());
        assert!(report.error.unwrap().contains("oral"));
    }
}
