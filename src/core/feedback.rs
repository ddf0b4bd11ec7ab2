//! Per-letter feedback for one guess
//!
//! A [`Feedback`] is five `(Mark, letter)` cells in guess order. The harness can build
//! one from structured pairs, from the compact `"+t-e~a-c-h"` encoding, or from a
//! colored pattern such as `"GY-GY"` laid over a known guess.

use super::letter;
use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter in the correct position (green)
    Correct,
    /// Letter in the word, wrong position (yellow)
    Present,
    /// No unaccounted copy of the letter in the word (gray)
    Absent,
}

impl Mark {
    /// Symbol used in the compact encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '+',
            Self::Present => '~',
            Self::Absent => '-',
        }
    }

    /// Parse a compact-encoding symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Correct),
            '~' => Some(Self::Present),
            '-' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Parse a pattern character: G/Y/- letters or the colored squares
    #[must_use]
    pub const fn from_pattern_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Next mark in the absent → present → correct cycle
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }
}

impl FromStr for Mark {
    type Err = FeedbackError;

    /// Accepts the harness tokens `correct`, `present` and `absent`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "correct" => Ok(Self::Correct),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(FeedbackError::UnknownToken(s.to_string())),
        }
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must cover exactly 5 letters, got {0}")]
    WrongLength(usize),
    #[error("compact feedback pairs a symbol with each letter; {0} characters leave one unpaired")]
    UnpairedSymbol(usize),
    #[error("unknown feedback symbol '{0}'")]
    UnknownMark(char),
    #[error("unknown feedback token '{0}'")]
    UnknownToken(String),
    #[error("feedback letter '{0}' is not a-z")]
    InvalidLetter(char),
}

/// One letter of a guess and its mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub mark: Mark,
    pub letter: u8,
}

/// Feedback for exactly one five-letter guess, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    cells: [Cell; WORD_LENGTH],
}

impl Feedback {
    /// Build feedback from `(mark, letter)` pairs
    ///
    /// Letters are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `FeedbackError::WrongLength` unless exactly five pairs are given, and
    /// `FeedbackError::InvalidLetter` for anything outside a-z.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::from_pairs([
    ///     (Mark::Correct, 't'),
    ///     (Mark::Absent, 'e'),
    ///     (Mark::Present, 'a'),
    ///     (Mark::Absent, 'c'),
    ///     (Mark::Absent, 'h'),
    /// ])
    /// .unwrap();
    /// assert_eq!(feedback.to_string(), "+t-e~a-c-h");
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, FeedbackError>
    where
        I: IntoIterator<Item = (Mark, char)>,
    {
        let mut cells = [Cell {
            mark: Mark::Absent,
            letter: b'a',
        }; WORD_LENGTH];
        let mut len = 0;

        for (mark, ch) in pairs {
            if len < WORD_LENGTH {
                cells[len] = Cell {
                    mark,
                    letter: parse_letter(ch)?,
                };
            }
            len += 1;
        }

        if len == WORD_LENGTH {
            Ok(Self { cells })
        } else {
            Err(FeedbackError::WrongLength(len))
        }
    }

    /// Lay a colored pattern over a known guess
    ///
    /// Accepts G/g/🟩 for correct, Y/y/🟨 for present, -/_/⬜ for absent.
    ///
    /// # Errors
    /// Returns `FeedbackError::WrongLength` unless the pattern has five symbols, and
    /// `FeedbackError::UnknownMark` for any other character.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::{Feedback, Word};
    ///
    /// let guess = Word::new("teach").unwrap();
    /// let a = Feedback::from_pattern(&guess, "G-Y--").unwrap();
    /// let b = Feedback::from_pattern(&guess, "🟩⬜🟨⬜⬜").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, "+t-e~a-c-h".parse::<Feedback>().unwrap());
    /// ```
    pub fn from_pattern(guess: &Word, pattern: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = pattern.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell {
            mark: Mark::Absent,
            letter: b'a',
        }; WORD_LENGTH];
        for (i, &symbol) in symbols.iter().enumerate() {
            cells[i] = Cell {
                mark: Mark::from_pattern_char(symbol).ok_or(FeedbackError::UnknownMark(symbol))?,
                letter: guess.char_at(i),
            };
        }

        Ok(Self { cells })
    }

    /// All-correct feedback for a guess
    #[must_use]
    pub fn solved(guess: &Word) -> Self {
        Self::from_marks(guess, [Mark::Correct; WORD_LENGTH])
    }

    /// Pair each letter of `guess` with its mark
    #[must_use]
    pub fn from_marks(guess: &Word, marks: [Mark; WORD_LENGTH]) -> Self {
        let mut cells = [Cell {
            mark: Mark::Absent,
            letter: b'a',
        }; WORD_LENGTH];
        for (i, mark) in marks.into_iter().enumerate() {
            cells[i] = Cell {
                mark,
                letter: guess.char_at(i),
            };
        }
        Self { cells }
    }

    /// Calculate the feedback a puzzle gives when `guess` is played against `answer`
    ///
    /// Greens are assigned first; yellows then go left to right while the answer still
    /// has unmatched copies of the letter. Every other letter is absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::{Feedback, Word};
    ///
    /// let guess = Word::new("geese").unwrap();
    /// let answer = Word::new("cheap").unwrap();
    /// assert_eq!(Feedback::score(&guess, &answer).to_string(), "-g-e+e-s-e");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = answer.char_counts();

        // Allow: Index needed to compare guess[i] with answer[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == answer.char_at(i) {
                marks[i] = Mark::Correct;
                available[letter::index(guess.char_at(i))] -= 1;
            }
        }

        // Allow: Index needed to check marks[i] and read guess[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            let remaining = &mut available[letter::index(guess.char_at(i))];
            if *remaining > 0 {
                marks[i] = Mark::Present;
                *remaining -= 1;
            }
        }

        Self::from_marks(guess, marks)
    }

    /// Cells in guess order
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// The guess this feedback describes
    #[must_use]
    pub fn guess(&self) -> Word {
        let mut chars = [0; WORD_LENGTH];
        for (ch, cell) in chars.iter_mut().zip(&self.cells) {
            *ch = cell.letter;
        }
        Word::from_bytes(chars).expect("feedback letters are validated")
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.mark == Mark::Correct)
    }

    /// Render as colored squares, e.g. "🟩⬜🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|cell| cell.mark.to_emoji()).collect()
    }
}

/// Parses the compact encoding: five symbol/letter pairs such as `"+t-e~a-c-h"`
impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() % 2 == 1 {
            return Err(FeedbackError::UnpairedSymbol(chars.len()));
        }
        if chars.len() != WORD_LENGTH * 2 {
            return Err(FeedbackError::WrongLength(chars.len() / 2));
        }

        let pairs = chars
            .chunks_exact(2)
            .map(|pair| {
                Mark::from_symbol(pair[0])
                    .map(|mark| (mark, pair[1]))
                    .ok_or(FeedbackError::UnknownMark(pair[0]))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_pairs(pairs)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}{}", cell.mark.symbol(), cell.letter as char)?;
        }
        Ok(())
    }
}

fn parse_letter(ch: char) -> Result<u8, FeedbackError> {
    if ch.is_ascii_alphabetic() {
        Ok(ch.to_ascii_lowercase() as u8)
    } else {
        Err(FeedbackError::InvalidLetter(ch))
    }
}
