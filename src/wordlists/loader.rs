//! Word list loading utilities
//!
//! Word files are one word per line. Anything that is not a five-letter word is
//! ignored, and repeats are dropped.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and invalid entries are skipped; duplicates keep their first position.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_eliminator::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/common.txt").unwrap();
/// assert!(!words.is_empty());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok());

    Ok(dedup(words))
}

/// Convert an embedded string list to words
///
/// # Examples
/// ```
/// use wordle_eliminator::wordlists::loader::words_from_slice;
/// use wordle_eliminator::wordlists::COMMON;
///
/// let words = words_from_slice(COMMON);
/// assert_eq!(words.len(), COMMON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

/// Drop repeated words, keeping the first occurrence of each
#[must_use]
pub fn dedup<I: IntoIterator<Item = Word>>(words: I) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|word| seen.insert(*word)).collect()
}
