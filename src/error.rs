use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("terminal or file error: {0}")]
    Io(#[from] io::Error),

    #[error("question deck could not be parsed: {0}")]
    Deck(String),

    #[error("QUIZ_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),

    #[error("logger setup failed: {0}")]
    Logger(String),
}

/// Returned when a string is neither "yes" nor "no" (in any case).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected \"yes\" or \"no\", got {0:?}")]
pub struct ParseAnswerError(pub String);
