//! The `traintrack mark` command.

use std::path::PathBuf;

use anyhow::Result;

use traintrack_core::config::load_config_from;
use traintrack_core::parser;
use traintrack_core::report::{MarkingReport, MarkingSession};
use traintrack_core::Marking;

pub fn execute(
    quiz_path: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or_else(|| config.default_format.clone());
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "markdown" | "md"),
        "unknown format '{format}', expected text, json or markdown"
    );

    let quiz_path = quiz_path.unwrap_or_else(|| config.quiz_dir.clone());
    let quizzes = parser::load_quizzes(&quiz_path)?;
    anyhow::ensure!(!quizzes.is_empty(), "no quizzes found in {}", quiz_path.display());
    tracing::debug!(count = quizzes.len(), path = %quiz_path.display(), "loaded quizzes");

    let reports: Vec<MarkingReport> = quizzes.iter().map(|q| Marking::new(q).report()).collect();
    let session = MarkingSession::new(reports, config.trainee());

    match format.as_str() {
        "json" => println!("{}", session.to_json()?),
        "markdown" | "md" => println!("{}", session.to_markdown()),
        _ => {
            for report in &session.reports {
                println!("{}", report.to_text());
            }
            if let Some(trainee) = &session.trainee {
                super::print_trainee(trainee);
            }
        }
    }

    let failed = session.failed();
    if !failed.is_empty() {
        anyhow::bail!(
            "{} quiz(zes) could not be turned into an assessment: {}",
            failed.len(),
            failed.join(", ")
        );
    }

    Ok(())
}
