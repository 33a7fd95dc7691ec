//! quizmaster configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `question_bank`.
pub const QUESTION_BANK_ENV: &str = "QUIZMASTER_QUESTION_BANK";

/// Top-level quizmaster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// Seed the question store with the built-in sample questions.
    #[serde(default = "default_true")]
    pub load_sample_questions: bool,
    /// A TOML question bank to load at startup, after the samples.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            load_sample_questions: true,
            question_bank: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations:
/// 1. `quizmaster.toml` in the current directory
/// 2. `~/.config/quizmaster/config.toml`
///
/// `QUIZMASTER_QUESTION_BANK` overrides `question_bank`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmaster.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_file(&path)?
        }
        None => QuizConfig::default(),
    };

    if let Ok(bank) = std::env::var(QUESTION_BANK_ENV) {
        if bank.trim().is_empty() {
            tracing::warn!("{QUESTION_BANK_ENV} is set but empty, ignoring");
        } else {
            config.question_bank = Some(PathBuf::from(bank));
        }
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<QuizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizmaster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert!(config.load_sample_questions);
        assert!(config.question_bank.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config: QuizConfig = toml::from_str(
            r#"
load_sample_questions = false
question_bank = "banks/science.toml"
"#,
        )
        .unwrap();
        assert!(!config.load_sample_questions);
        assert_eq!(
            config.question_bank,
            Some(PathBuf::from("banks/science.toml"))
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: QuizConfig = toml::from_str("").unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<QuizConfig>("load_samples = false").is_err());
    }

    #[test]
    fn explicit_path_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizmaster.toml");
        std::fs::write(&path, "load_sample_questions = false\n").unwrap();

        let config = parse_config_file(&path).unwrap();
        assert!(!config.load_sample_questions);
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
