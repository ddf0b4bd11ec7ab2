//! Core domain types for the puzzle
//!
//! Words, letters and per-guess feedback. Everything here is pure and independent
//! of how guesses are chosen.

mod feedback;
pub mod letter;
mod word;

pub use feedback::{Cell, Feedback, FeedbackError, Mark};
pub use letter::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
