//! The `traintrack validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let quizzes = traintrack_core::parser::load_quizzes(&quiz_path)?;

    let mut total_warnings = 0;

    for quiz in &quizzes {
        println!(
            "Quiz: {} [{}] ({} questions)",
            quiz.name(),
            quiz.kind(),
            quiz.len()
        );

        let warnings = traintrack_core::parser::validate_quiz(quiz);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [Q{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
