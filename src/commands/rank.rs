//! Offline word-list ranking
//!
//! Sorts a word file by letter variety, the order the embedded lists are stored in.

use crate::core::Word;
use crate::wordlists::loader::load_from_file;
use crate::wordlists::sort_by_unique_letter_count;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Load `path`, keep only words also found in `against` (if given), and rank them
///
/// # Errors
///
/// Returns an error if either file cannot be read.
pub fn rank_file(path: &Path, against: Option<&Path>) -> Result<Vec<Word>> {
    let mut words =
        load_from_file(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if let Some(dictionary) = against {
        let allowed: FxHashSet<Word> = load_from_file(dictionary)
            .with_context(|| format!("Failed to read {}", dictionary.display()))?
            .into_iter()
            .collect();
        words.retain(|word| allowed.contains(word));
    }

    Ok(sort_by_unique_letter_count(words))
}
