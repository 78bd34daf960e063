//! traintrack configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trainee::Trainee;

/// Identity of the trainee that marked quizzes are recorded against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraineeConfig {
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// ISO date, e.g. `"1990-01-01"`.
    pub date_of_birth: NaiveDate,
}

/// Top-level traintrack configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Trainee that `mark` attaches generated assessments to.
    #[serde(default)]
    pub trainee: Option<TraineeConfig>,
    /// Output format when none is given on the command line.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Where quiz files are looked up by default.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
}

fn default_format() -> String {
    "text".to_string()
}
fn default_quiz_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            trainee: None,
            default_format: default_format(),
            quiz_dir: default_quiz_dir(),
        }
    }
}

impl TrackConfig {
    /// A fresh trainee record for the configured identity.
    pub fn trainee(&self) -> Option<Trainee> {
        self.trainee
            .as_ref()
            .map(|t| Trainee::new(t.name.clone(), t.email.clone(), t.date_of_birth))
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `traintrack.toml` in the current directory
/// 2. `~/.config/traintrack/config.toml`
///
/// Environment variable override: `TRAINTRACK_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<TrackConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("traintrack.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TrackConfig::default(),
    };

    if let Ok(format) = std::env::var("TRAINTRACK_FORMAT") {
        config.default_format = format;
    }

    Ok(config)
}

/// Parse a TOML string into a config.
pub fn parse_config_str(content: &str) -> Result<TrackConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("traintrack"))
}
