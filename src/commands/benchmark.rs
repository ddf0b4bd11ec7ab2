//! Benchmark command
//!
//! Tests solver performance across multiple words.

use super::GameSetup;
use super::solve::play_game;
use crate::core::Word;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets from the common words
///
/// Takes the first `count` words, or a uniform random sample of `count` words when
/// `random` is set.
#[must_use]
pub fn pick_targets(common: &[Word], count: usize, random: bool) -> Vec<Word> {
    if random {
        use rand::prelude::IndexedRandom;

        common
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect()
    } else {
        common.iter().take(count).copied().collect()
    }
}

/// Run benchmark on a set of target words
///
/// Every target is played with a fresh solver. Unsolved games count as the number
/// of guesses made; a game that runs out of candidates counts as failed.
pub fn run_benchmark(setup: &GameSetup, target_words: &[Word]) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in target_words {
        let guesses = match play_game(setup.solver(), target) {
            Ok(result) => {
                if result.success {
                    solved += 1;
                }
                result.guesses.len()
            }
            Err(_) => usize::from(setup.config.max_rounds),
        };

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Corpus;

    fn targets(count: usize) -> Vec<Word> {
        pick_targets(Corpus::embedded().common(), count, false)
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&GameSetup::default(), &targets(10));

        assert_eq!(result.total_words, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&GameSetup::default(), &targets(10));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&GameSetup::default(), &[]);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(&GameSetup::default(), &targets(10));

        // Average should be between min and max
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        // Distribution should only contain valid guess counts (1-6)
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn random_targets_come_from_common() {
        let corpus = Corpus::embedded();
        let picked = pick_targets(corpus.common(), 20, true);

        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|w| corpus.common().contains(w)));
    }

    #[test]
    fn first_targets_keep_order() {
        let corpus = Corpus::embedded();
        assert_eq!(pick_targets(corpus.common(), 3, false), corpus.common()[..3].to_vec());
    }
}
