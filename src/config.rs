use crate::error::QuizError;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub seed: Option<u64>,
}

impl Config {
    /// Reads `QUIZ_LOG_FILE` and `QUIZ_SEED`.
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_vars(
            std::env::var("QUIZ_LOG_FILE").ok(),
            std::env::var("QUIZ_SEED").ok(),
        )
    }

    pub fn from_vars(log_file: Option<String>, seed: Option<String>) -> Result<Self, QuizError> {
        let log_file = log_file
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let seed = match seed {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| QuizError::InvalidSeed(raw.clone()))?,
            ),
            _ => None,
        };

        Ok(Self { log_file, seed })
    }
}
