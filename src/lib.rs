//! Word Eliminator
//!
//! Plays a five-letter word puzzle by elimination: every round's feedback is folded
//! into accumulated letter knowledge, both word pools are filtered against it, and the
//! next guess is ranked by letter variety and letter divisiveness.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_eliminator::solver::{RankingPolicy, Solver};
//! use wordle_eliminator::wordlists::Corpus;
//!
//! let corpus = Corpus::embedded();
//! let mut solver = Solver::new(RankingPolicy, &corpus);
//!
//! let opener = solver.next_guess().unwrap();
//! assert_eq!(opener.text(), "teach");
//!
//! // None of t, e, a, c, h is in the answer
//! solver.absorb_str("-t-e-a-c-h").unwrap();
//! let next = solver.next_guess().unwrap();
//! assert!(!next.letters().intersects(opener.letters()));
//! ```

// Core domain types
pub mod core;

// Knowledge, filtering, scoring and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
