//! traintrack-core — Assessment model, quiz marking, and trainee records.
//!
//! Questions are collected into a quiz, marked into a percentage, and turned
//! into a weighted assessment that is recorded against a trainee.

pub mod assessment;
pub mod config;
pub mod error;
pub mod marking;
pub mod parser;
pub mod quiz;
pub mod report;
pub mod statistics;
pub mod trainee;

pub use assessment::{Assessment, AssessmentKind, Weighting};
pub use error::AssessmentError;
pub use marking::Marking;
pub use quiz::{Question, Quiz, MAX_QUESTIONS};
pub use trainee::Trainee;
