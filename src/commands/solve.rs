//! Word solving command
//!
//! Plays a full game against a known answer and records every turn.

use super::GameSetup;
use crate::core::{Feedback, Word};
use crate::solver::{GuessPolicy, Solver, SolverError};
use anyhow::{Context, Result};

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub legal_before: usize,
    pub legal_after: usize,
    pub common_before: usize,
    pub common_after: usize,
}

/// Play one game to the end against a known answer
///
/// Stops at the first solved round or once the solver runs out of rounds.
///
/// # Errors
/// Returns [`SolverError::NoCandidates`] if the answer is not in the solver's word
/// lists and every candidate has been eliminated.
pub fn play_game<P: GuessPolicy>(
    mut solver: Solver<P>,
    answer: &Word,
) -> Result<SolveResult, SolverError> {
    let mut guesses = Vec::new();

    loop {
        let legal_before = solver.remaining_legal().len();
        let common_before = solver.remaining_common().len();

        let word = match solver.next_guess() {
            Ok(word) => word,
            Err(SolverError::RoundLimitExceeded { .. }) => break,
            Err(e) => return Err(e),
        };
        let feedback = Feedback::score(&word, answer);
        solver.absorb(&feedback);

        guesses.push(GuessStep {
            word,
            feedback,
            legal_before,
            legal_after: solver.remaining_legal().len(),
            common_before,
            common_after: solver.remaining_common().len(),
        });

        if feedback.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: *answer,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: *answer,
    })
}

/// Solve a specific word with a fresh solver from `setup`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - Every candidate is eliminated before the answer is found
pub fn solve_word(target: &str, setup: &GameSetup) -> Result<SolveResult> {
    let answer = Word::new(target).with_context(|| format!("Invalid target word '{target}'"))?;

    play_game(setup.solver(), &answer)
        .with_context(|| format!("Could not solve '{answer}' with the loaded word lists"))
}
