//! Word representation
//!
//! A Word stores a five-letter word as bytes along with the set of letters it contains,
//! so the filter and scorer can answer membership questions without rescanning.

use super::letter::{self, ALPHABET, LetterSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of every word the solver handles
pub const WORD_LENGTH: usize = 5;

/// A validated five-letter lowercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::Word;
    ///
    /// let word = Word::new("Teach").unwrap();
    /// assert_eq!(word.text(), "teach");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        let chars: [u8; WORD_LENGTH] = bytes
            .try_into()
            .map_err(|_| WordError::InvalidLength(bytes.len()))?;

        Self::from_bytes(chars)
    }

    /// Create a Word from five ASCII bytes, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_bytes(mut chars: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        chars.make_ascii_lowercase();

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            chars,
            letters: chars.iter().copied().collect(),
        })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - construction guarantees the bytes are ASCII letters.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("validated ascii")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Number of distinct letters, the letter-variety grade
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> usize {
        self.letters.len()
    }

    /// How many times a letter occurs
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&ch| ch == letter).count()
    }

    /// Occurrence count of every letter
    pub(crate) fn char_counts(&self) -> [u8; ALPHABET] {
        let mut counts = [0; ALPHABET];
        for &ch in &self.chars {
            counts[letter::index(ch)] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
