//! Game configuration

use crate::core::{Word, WordError};

/// Opening guess: high letter variety, common letters
pub const DEFAULT_OPENER: &str = "teach";

/// Guesses allowed per game
pub const DEFAULT_MAX_ROUNDS: u8 = 6;

/// Pool size at or below which the first word is guessed without ranking
pub const DEFAULT_SHORTLIST: usize = 2;

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Word played in round 1, regardless of the corpus
    pub opening_word: Word,
    /// The last round; asking for a guess after it is an error
    pub max_rounds: u8,
    /// A pool this small is guessed from directly
    pub shortlist: usize,
}

impl GameConfig {
    /// Default configuration with a different opening word
    ///
    /// # Errors
    /// Returns `WordError` if `opener` is not a valid five-letter word.
    pub fn with_opener(opener: &str) -> Result<Self, WordError> {
        Ok(Self {
            opening_word: Word::new(opener)?,
            ..Self::default()
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opening_word: Word::new(DEFAULT_OPENER).expect("default opener is a valid word"),
            max_rounds: DEFAULT_MAX_ROUNDS,
            shortlist: DEFAULT_SHORTLIST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.opening_word.text(), "teach");
        assert_eq!(config.max_rounds, 6);
        assert_eq!(config.shortlist, 2);
    }

    #[test]
    fn custom_opener() {
        let config = GameConfig::with_opener("SLATE").unwrap();
        assert_eq!(config.opening_word.text(), "slate");
        assert_eq!(config.max_rounds, DEFAULT_MAX_ROUNDS);

        assert!(GameConfig::with_opener("slates").is_err());
    }
}
