//! TOML quiz parser.
//!
//! Loads quizzes from TOML files and directories, and lints them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::assessment::AssessmentKind;
use crate::quiz::{Question, Quiz, MAX_QUESTIONS};

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    question: String,
    #[serde(default)]
    chosen_answer: String,
    correct_answer: String,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz`.
///
/// Neither the type tag nor the question count is checked here; use
/// [`validate_quiz`] for that.
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question::new(q.question, q.chosen_answer, q.correct_answer))
        .collect();

    Ok(Quiz::new(questions, parsed.quiz.name, parsed.quiz.kind))
}

/// Recursively load all `.toml` quiz files from a directory.
///
/// Files that fail to parse are skipped with a warning. Entries are visited
/// in path order so results are stable.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// Load a single file, or every quiz under a directory.
pub fn load_quizzes(path: &Path) -> Result<Vec<Quiz>> {
    if path.is_dir() {
        load_quiz_directory(path)
    } else {
        Ok(vec![parse_quiz(path)?])
    }
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for common issues.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Type tags are otherwise only checked when the assessment is generated
    if quiz.kind().parse::<AssessmentKind>().is_err() {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "unknown quiz type {:?}, marking will not produce an assessment",
                quiz.kind()
            ),
        });
    }

    if quiz.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions and will always score 0".into(),
        });
    }

    if quiz.len() > MAX_QUESTIONS {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "quiz has {} questions, more than the limit of {MAX_QUESTIONS}",
                quiz.len()
            ),
        });
    }

    let mut seen = HashSet::new();
    for (i, q) in quiz.questions().iter().enumerate() {
        let number = Some(i + 1);
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "question text is empty".into(),
            });
        } else if !seen.insert(q.text.as_str()) {
            warnings.push(ValidationWarning {
                question: number,
                message: format!("duplicate question: {}", q.text),
            });
        }
        if q.chosen_answer.is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "no answer given".into(),
            });
        }
    }

    warnings
}
