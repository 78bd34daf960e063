//! Assessment error types.
//!
//! Every variant is a validation failure raised at the point an invariant
//! would be broken. Nothing is clamped or deferred.

use thiserror::Error;

/// Errors raised while building assessments, quizzes and trainee queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    /// The type tag is not one of the known assessment kinds.
    #[error("invalid assessment type: {0:?}")]
    InvalidType(String),

    /// The score lies outside the inclusive range 0 to 100.
    #[error("score must be between 0 and 100, got {0}")]
    ScoreOutOfRange(f64),

    /// Adding a question would push the quiz over its size limit.
    #[error("quiz must have at most {max} questions, adding one would make {attempted}")]
    QuizTooLong { max: usize, attempted: usize },
}

impl AssessmentError {
    /// Returns `true` for errors caused by a bad argument.
    ///
    /// All current variants are validation errors. A non-assessment value
    /// cannot be handed to a trainee in the first place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AssessmentError::InvalidType(_)
                | AssessmentError::ScoreOutOfRange(_)
                | AssessmentError::QuizTooLong { .. }
        )
    }

    /// The offending type tag, if this is a type error.
    pub fn invalid_type(&self) -> Option<&str> {
        match self {
            AssessmentError::InvalidType(tag) => Some(tag),
            _ => None,
        }
    }
}
