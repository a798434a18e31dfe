pub mod config;
pub mod error;
pub mod logger;
pub mod manager;
pub mod models;
pub mod questions;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use config::Config;
pub use error::{ParseAnswerError, QuizError};
pub use manager::QuizManager;
pub use models::{Answer, AppState, Question, QuizSession, QuizSummary};
pub use questions::sample_deck;
pub use session::{available_controls, handle_quiz_input, handle_summary_input, Controls};
pub use ui::{draw_quiz, draw_summary};
pub use utils::truncate_string;
