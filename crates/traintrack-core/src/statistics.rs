//! Aggregate statistics over a trainee's assessments.

use serde::Serialize;

use crate::assessment::{Assessment, AssessmentKind};
use crate::trainee::Trainee;

/// Summary of every assessment a trainee holds.
#[derive(Debug, Clone, Serialize)]
pub struct TraineeSummary {
    pub trainee: String,
    /// Number of assessments.
    pub count: usize,
    /// Mean weighted score across all assessments.
    pub mean_weighted_score: Option<f64>,
    /// Per-kind breakdown, in [`AssessmentKind::ALL`] order. Kinds with no
    /// assessments are included with a zero count.
    pub per_kind: Vec<KindStats>,
}

/// Statistics for one assessment kind.
#[derive(Debug, Clone, Serialize)]
pub struct KindStats {
    pub kind: AssessmentKind,
    pub count: usize,
    pub mean_score: Option<f64>,
    pub mean_weighted_score: Option<f64>,
}

impl TraineeSummary {
    pub fn compute(trainee: &Trainee) -> Self {
        let all = trainee.assessments();

        let per_kind = AssessmentKind::ALL
            .into_iter()
            .map(|kind| {
                let of_kind = trainee.assessments_of_kind(kind);
                KindStats {
                    kind,
                    count: of_kind.len(),
                    mean_score: mean(of_kind.iter().map(|a| a.score())),
                    mean_weighted_score: mean(of_kind.iter().map(|a| a.calculate_score())),
                }
            })
            .collect();

        Self {
            trainee: trainee.name.clone(),
            count: all.len(),
            mean_weighted_score: mean(all.iter().map(Assessment::calculate_score)),
            per_kind,
        }
    }

    /// Stats for a single kind.
    pub fn kind(&self, kind: AssessmentKind) -> Option<&KindStats> {
        self.per_kind.iter().find(|k| k.kind == kind)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0f64, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}
