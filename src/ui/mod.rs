pub mod layout;
mod quiz;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use quiz::draw_quiz;
pub use summary::draw_summary;
