//! Word analysis command
//!
//! Shows how a word ranks against the full common pool: letter variety, summed
//! divisiveness and its position in the ranking.

use crate::core::Word;
use crate::solver::LetterScores;
use crate::solver::{divisiveness, policy};
use crate::wordlists::Corpus;
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub distinct_letters: usize,
    pub divisiveness: f64,
    /// Position in the ranked common pool, starting at 1; `None` if the word is not common
    pub rank: Option<usize>,
    pub pool_size: usize,
    pub letter_scores: LetterScores,
}

/// Analyze a word against the common words of `corpus`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not a legal guess
pub fn analyze_word(word: &str, corpus: &Corpus) -> Result<AnalysisResult> {
    let word = Word::new(word)?;

    if !corpus.legal().contains(&word) {
        bail!("Word '{word}' not in word list");
    }

    let pool = corpus.common();
    let letter_scores = divisiveness::score(pool);
    let rank = policy::rank(pool)
        .iter()
        .position(|ranked| ranked.word == word)
        .map(|index| index + 1);

    Ok(AnalysisResult {
        word,
        distinct_letters: word.distinct_letters(),
        divisiveness: letter_scores.word_score(&word),
        rank,
        pool_size: pool.len(),
        letter_scores,
    })
}
