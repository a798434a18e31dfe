use crate::error::ParseAnswerError;
use crate::manager::QuizManager;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }

    /// Case-insensitive comparison against a raw answer string.
    pub fn matches(self, raw: &str) -> bool {
        raw.to_lowercase() == self.as_str()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Answer::Yes.matches(s) {
            Ok(Answer::Yes)
        } else if Answer::No.matches(s) {
            Ok(Answer::No)
        } else {
            Err(ParseAnswerError(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub correct: Answer,
}

impl Question {
    pub fn new(text: impl Into<String>, correct: Answer) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// Snapshot of the counters shown when a quiz ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: i32,
    pub right: usize,
    pub wrong: usize,
    pub skipped: usize,
    pub attempted: usize,
}

#[derive(Debug)]
pub struct QuizSession {
    pub manager: QuizManager,
    pub status: Option<String>,
    pub ended: bool,
}

impl QuizSession {
    pub fn new(manager: QuizManager) -> Self {
        Self {
            manager,
            status: None,
            ended: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    Summary,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_parse_is_case_insensitive() {
        assert_eq!("yes".parse::<Answer>(), Ok(Answer::Yes));
        assert_eq!("YES".parse::<Answer>(), Ok(Answer::Yes));
        assert_eq!("No".parse::<Answer>(), Ok(Answer::No));
    }

    #[test]
    fn test_answer_parse_rejects_other_words() {
        let result = "maybe".parse::<Answer>();
        assert_eq!(result, Err(ParseAnswerError("maybe".to_string())));
        assert!(" yes".parse::<Answer>().is_err());
    }

    #[test]
    fn test_answer_matches() {
        assert!(Answer::No.matches("NO"));
        assert!(!Answer::No.matches("yes"));
        assert!(!Answer::Yes.matches(""));
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Yes.to_string(), "yes");
        assert_eq!(Answer::No.to_string(), "no");
    }

    #[test]
    fn test_question_deserializes_lowercase_answer() {
        let json = r#"{"text": "Is a stack LIFO?", "correct": "yes"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question, Question::new("Is a stack LIFO?", Answer::Yes));
    }

    #[test]
    fn test_question_rejects_unknown_answer() {
        let json = r#"{"text": "Q", "correct": "perhaps"}"#;
        let result: Result<Question, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiz_session_creation() {
        let manager = QuizManager::with_seed(vec![Question::new("Q1", Answer::Yes)], 1);
        let session = QuizSession::new(manager);
        assert!(session.status.is_none());
        assert!(!session.ended);
        assert_eq!(session.manager.len(), 1);
    }
}
