//! Candidate elimination
//!
//! Knowledge accumulation, pool filtering, letter divisiveness and the policies that
//! turn them into guesses.

mod config;
pub mod divisiveness;
mod engine;
mod error;
mod filter;
mod knowledge;
pub mod policy;

pub use config::{DEFAULT_MAX_ROUNDS, DEFAULT_OPENER, DEFAULT_SHORTLIST, GameConfig};
pub use divisiveness::{LetterScores, MAX_SCORE};
pub use engine::Solver;
pub use error::SolverError;
pub use knowledge::{Fact, Knowledge};
pub use policy::{GuessPolicy, IndicatorPolicy, PolicyType, RankingPolicy, Turn};
