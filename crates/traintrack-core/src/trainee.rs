//! Trainees and their assessment records.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::assessment::{Assessment, AssessmentKind};
use crate::error::AssessmentError;

/// A trainee and the assessments they have completed, in the order added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trainee {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    assessments: Vec<Assessment>,
}

impl Trainee {
    /// A trainee with no assessments yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self::with_assessments(name, email, date_of_birth, Vec::new())
    }

    /// A trainee starting from an existing list of assessments.
    pub fn with_assessments(
        name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        assessments: Vec<Assessment>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            date_of_birth,
            assessments,
        }
    }

    /// Age in whole calendar years as of today's local date.
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// Calendar year of `today` minus birth year. Whether the birthday has
    /// passed yet in that year is not taken into account.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        today.year() - self.date_of_birth.year()
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    pub fn add_assessment(&mut self, assessment: Assessment) {
        tracing::debug!(
            trainee = %self.name,
            assessment = assessment.name(),
            "recording assessment"
        );
        self.assessments.push(assessment);
    }

    /// First assessment with exactly this name.
    pub fn get_assessment(&self, name: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.name() == name)
    }

    /// All assessments whose type tag is `assessment_type`, in insertion order.
    ///
    /// Unknown tags are an error rather than an empty result.
    pub fn get_assessment_of_type(
        &self,
        assessment_type: &str,
    ) -> Result<Vec<&Assessment>, AssessmentError> {
        let kind: AssessmentKind = assessment_type.parse()?;
        Ok(self.assessments_of_kind(kind))
    }

    pub fn assessments_of_kind(&self, kind: AssessmentKind) -> Vec<&Assessment> {
        self.assessments.iter().filter(|a| a.kind() == kind).collect()
    }
}
