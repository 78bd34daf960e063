//! Assessment records and their per-kind weighting.
//!
//! An assessment is a named, typed score in the range 0 to 100. Weighted
//! assessments scale their score by a fixed multiplier that depends only on
//! the kind; the base variant reports its raw score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// Lowest accepted score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted score.
pub const MAX_SCORE: f64 = 100.0;

/// The closed set of assessment types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    MultipleChoice,
    Technical,
    Presentation,
}

impl AssessmentKind {
    /// Every kind, in declaration order.
    pub const ALL: [AssessmentKind; 3] = [
        AssessmentKind::MultipleChoice,
        AssessmentKind::Technical,
        AssessmentKind::Presentation,
    ];

    /// The canonical type tag (e.g. `"multiple-choice"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::MultipleChoice => "multiple-choice",
            AssessmentKind::Technical => "technical",
            AssessmentKind::Presentation => "presentation",
        }
    }

    /// Weight applied to the raw score of a weighted assessment.
    pub fn multiplier(&self) -> f64 {
        match self {
            AssessmentKind::MultipleChoice => 0.7,
            AssessmentKind::Technical => 1.0,
            AssessmentKind::Presentation => 0.6,
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = AssessmentError;

    /// Tags must match exactly; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssessmentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AssessmentError::InvalidType(s.to_string()))
    }
}

/// How an assessment turns its raw score into a weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Base assessment, score reported as-is.
    Unweighted,
    /// Score scaled by the kind's multiplier.
    ByKind,
}

/// A scored, typed record of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    name: String,
    #[serde(rename = "type")]
    kind: AssessmentKind,
    score: f64,
    weighting: Weighting,
}

impl Assessment {
    /// Build a base (unweighted) assessment from a raw type tag.
    ///
    /// The tag is checked before the score.
    pub fn new(
        name: impl Into<String>,
        assessment_type: &str,
        score: f64,
    ) -> Result<Self, AssessmentError> {
        let kind = assessment_type.parse()?;
        Self::build(name.into(), kind, score, Weighting::Unweighted)
    }

    /// Build a weighted assessment of the given kind.
    pub fn weighted(
        name: impl Into<String>,
        kind: AssessmentKind,
        score: f64,
    ) -> Result<Self, AssessmentError> {
        Self::build(name.into(), kind, score, Weighting::ByKind)
    }

    /// Weighted multiple-choice assessment (x0.7).
    pub fn multiple_choice(name: impl Into<String>, score: f64) -> Result<Self, AssessmentError> {
        Self::weighted(name, AssessmentKind::MultipleChoice, score)
    }

    /// Weighted technical assessment (x1.0).
    pub fn technical(name: impl Into<String>, score: f64) -> Result<Self, AssessmentError> {
        Self::weighted(name, AssessmentKind::Technical, score)
    }

    /// Weighted presentation assessment (x0.6).
    pub fn presentation(name: impl Into<String>, score: f64) -> Result<Self, AssessmentError> {
        Self::weighted(name, AssessmentKind::Presentation, score)
    }

    fn build(
        name: String,
        kind: AssessmentKind,
        score: f64,
        weighting: Weighting,
    ) -> Result<Self, AssessmentError> {
        // NaN fails the range check too.
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(AssessmentError::ScoreOutOfRange(score));
        }
        Ok(Self {
            name,
            kind,
            score,
            weighting,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AssessmentKind {
        self.kind
    }

    /// The raw score as supplied at construction.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    pub fn is_weighted(&self) -> bool {
        self.weighting == Weighting::ByKind
    }

    /// The weighted score: raw score times the kind multiplier, or the raw
    /// score for a base assessment.
    pub fn calculate_score(&self) -> f64 {
        match self.weighting {
            Weighting::Unweighted => self.score,
            Weighting::ByKind => self.score * self.kind.multiplier(),
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.kind, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn kind_display_and_parse() {
        assert_eq!(AssessmentKind::MultipleChoice.to_string(), "multiple-choice");
        assert_eq!(
            "technical".parse::<AssessmentKind>().unwrap(),
            AssessmentKind::Technical
        );
        assert_eq!(
            "presentation".parse::<AssessmentKind>().unwrap(),
            AssessmentKind::Presentation
        );
        assert!("Technical".parse::<AssessmentKind>().is_err());
        assert!(" technical".parse::<AssessmentKind>().is_err());
        assert!("essay".parse::<AssessmentKind>().is_err());
    }

    #[test]
    fn base_assessment_is_unweighted() {
        for kind in AssessmentKind::ALL {
            let a = Assessment::new("Python Basics", kind.as_str(), 90.1).unwrap();
            assert_eq!(a.kind(), kind);
            assert!(!a.is_weighted());
            assert!(approx(a.calculate_score(), 90.1));
        }
    }

    #[test]
    fn weighted_scores_use_multiplier_table() {
        let mc = Assessment::multiple_choice("Python OOP", 80.0).unwrap();
        assert!(approx(mc.calculate_score(), 56.0));
        assert_eq!(mc.kind(), AssessmentKind::MultipleChoice);

        let tech = Assessment::technical("Data Structures", 67.4).unwrap();
        assert!(approx(tech.calculate_score(), 67.4));

        let pres = Assessment::presentation("Demo Day", 50.0).unwrap();
        assert!(approx(pres.calculate_score(), 30.0));
    }

    #[test]
    fn score_bounds_are_inclusive() {
        assert!(Assessment::technical("low", 0.0).is_ok());
        assert!(Assessment::technical("high", 100.0).is_ok());
        assert_eq!(
            Assessment::technical("under", -0.01),
            Err(AssessmentError::ScoreOutOfRange(-0.01))
        );
        assert_eq!(
            Assessment::new("over", "technical", 100.01),
            Err(AssessmentError::ScoreOutOfRange(100.01))
        );
        assert!(Assessment::presentation("nan", f64::NAN).is_err());
    }

    #[test]
    fn every_kind_across_the_score_range() {
        for kind in AssessmentKind::ALL {
            for score in [0.0, 0.5, 50.0, 99.99, 100.0] {
                let base = Assessment::new("sweep", kind.as_str(), score).unwrap();
                assert!(approx(base.calculate_score(), score), "{kind} base {score}");

                let weighted = Assessment::weighted("sweep", kind, score).unwrap();
                assert!(
                    approx(weighted.calculate_score(), score * kind.multiplier()),
                    "{kind} weighted {score}"
                );
            }

            for score in [-0.01, 100.01, f64::INFINITY, f64::NEG_INFINITY] {
                assert_eq!(
                    Assessment::new("sweep", kind.as_str(), score),
                    Err(AssessmentError::ScoreOutOfRange(score)),
                    "{kind} base {score}"
                );
                assert_eq!(
                    Assessment::weighted("sweep", kind, score),
                    Err(AssessmentError::ScoreOutOfRange(score)),
                    "{kind} weighted {score}"
                );
            }
        }
    }

    #[test]
    fn unknown_type_rejected_before_score() {
        let err = Assessment::new("x", "essay", 500.0).unwrap_err();
        assert_eq!(err, AssessmentError::InvalidType("essay".into()));
    }

    #[test]
    fn serializes_type_tag() {
        let a = Assessment::multiple_choice("Quiz", 60.0).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["type"], "multiple-choice");
        assert_eq!(json["weighting"], "by_kind");
        assert_eq!(json["name"], "Quiz");
    }
}
