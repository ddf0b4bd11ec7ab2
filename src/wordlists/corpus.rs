//! The two word lists a game is played against

use super::loader::{dedup, words_from_slice};
use super::{COMMON, LEGAL};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Sort words by distinct-letter count, most varied first
///
/// The sort is stable, so words with equal counts keep their input order.
///
/// # Examples
/// ```
/// use wordle_eliminator::core::Word;
/// use wordle_eliminator::wordlists::sort_by_unique_letter_count;
///
/// let words = ["geese", "teach", "llama"].map(|w| Word::new(w).unwrap()).to_vec();
/// let sorted = sort_by_unique_letter_count(words);
/// assert_eq!(sorted[0].text(), "teach");
/// ```
#[must_use]
pub fn sort_by_unique_letter_count(mut words: Vec<Word>) -> Vec<Word> {
    words.sort_by_key(|word| std::cmp::Reverse(word.distinct_letters()));
    words
}

/// Legal guesses plus the common words likely to be answers
///
/// Every common word is also legal. Both lists are in ranked order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    legal: Vec<Word>,
    common: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from lists already in the desired order
    ///
    /// Duplicates are dropped (first occurrence wins) and common words missing
    /// from the legal list are discarded.
    #[must_use]
    pub fn new(legal: Vec<Word>, common: Vec<Word>) -> Self {
        let legal = dedup(legal);
        let allowed: FxHashSet<Word> = legal.iter().copied().collect();
        let common = dedup(common.into_iter().filter(|word| allowed.contains(word)));
        Self { legal, common }
    }

    /// Build a corpus from unsorted lists, ranking both by letter variety
    #[must_use]
    pub fn ranked(legal: Vec<Word>, common: Vec<Word>) -> Self {
        Self::new(
            sort_by_unique_letter_count(legal),
            sort_by_unique_letter_count(common),
        )
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(LEGAL), words_from_slice(COMMON))
    }

    #[must_use]
    pub fn legal(&self) -> &[Word] {
        &self.legal
    }

    #[must_use]
    pub fn common(&self) -> &[Word] {
        &self.common
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::embedded()
    }
}
