//! Solver errors

use crate::core::FeedbackError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Both pools are empty: the feedback contradicts itself or the answer is outside
    /// the loaded word lists.
    #[error("no consistent candidates remain")]
    NoCandidates,

    /// A guess was requested after the final round.
    #[error("no guesses left: the game allows {max_rounds} rounds")]
    RoundLimitExceeded { max_rounds: u8 },

    /// Feedback could not be parsed.
    #[error("malformed feedback: {0}")]
    Feedback(#[from] FeedbackError),
}
