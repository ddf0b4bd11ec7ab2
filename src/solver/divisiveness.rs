//! Letter divisiveness scoring
//!
//! A letter found in exactly half of the remaining candidates splits the pool in two
//! whichever way its feedback falls. Letters found in almost every candidate, or almost
//! none, tell us little.

use crate::core::Word;
use crate::core::letter::{self, ALPHABET};
use rayon::prelude::*;

/// Score given to a letter that appears in exactly half of the pool
///
/// Finite, so summing several of them never overflows, and far above any real score
/// (which is at most 2.0).
pub const MAX_SCORE: f64 = 1.0e6;

/// Per-letter divisiveness over one pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScores {
    scores: [f64; ALPHABET],
    appearances: [usize; ALPHABET],
    pool_size: usize,
}

impl LetterScores {
    /// Score of a single letter
    #[inline]
    #[must_use]
    pub const fn of(&self, letter: u8) -> f64 {
        self.scores[letter::index(letter)]
    }

    /// Number of pool words containing the letter at least once
    #[inline]
    #[must_use]
    pub const fn appearances(&self, letter: u8) -> usize {
        self.appearances[letter::index(letter)]
    }

    /// Size of the pool the scores were computed over
    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Sum of the scores of the word's distinct letters
    #[must_use]
    pub fn word_score(&self, word: &Word) -> f64 {
        word.letters().iter().map(|letter| self.of(letter)).sum()
    }

    /// Letters ordered from most to least divisive
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, f64)> {
        let mut letters: Vec<(u8, f64)> = letter::alphabet().map(|l| (l, self.of(l))).collect();
        letters.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        letters
    }
}

/// Score every letter of the alphabet against `pool`
///
/// `score = 1 / |N/2 - appearances|`, with [`MAX_SCORE`] when the letter appears in
/// exactly half of the `N` words.
///
/// # Examples
/// ```
/// use wordle_eliminator::core::Word;
/// use wordle_eliminator::solver::divisiveness::{MAX_SCORE, score};
///
/// let pool: Vec<Word> = ["tipsy", "sound", "lemon", "brawl"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let scores = score(&pool);
///
/// assert_eq!(scores.of(b'o'), MAX_SCORE); // in 2 of 4 words
/// assert_eq!(scores.of(b'z'), 0.5); // in none: 1 / |2 - 0|
/// ```
#[must_use]
pub fn score(pool: &[Word]) -> LetterScores {
    let appearances = pool
        .par_iter()
        .fold(
            || [0usize; ALPHABET],
            |mut counts, word| {
                for letter in word.letters().iter() {
                    counts[letter::index(letter)] += 1;
                }
                counts
            },
        )
        .reduce(
            || [0usize; ALPHABET],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );

    let half = pool.len() as f64 / 2.0;
    let mut scores = [0.0; ALPHABET];
    for (score, &count) in scores.iter_mut().zip(&appearances) {
        let distance = (half - count as f64).abs();
        *score = if distance == 0.0 {
            MAX_SCORE
        } else {
            1.0 / distance
        };
    }

    LetterScores {
        scores,
        appearances,
        pool_size: pool.len(),
    }
}
