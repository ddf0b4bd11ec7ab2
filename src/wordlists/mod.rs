//! Word lists for the solver
//!
//! Provides embedded word lists compiled into the binary, a file loader for custom
//! lists, and the [`Corpus`] that pairs legal guesses with likely answers.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{Corpus, sort_by_unique_letter_count};
pub use embedded::{COMMON, COMMON_COUNT, LEGAL, LEGAL_COUNT};
