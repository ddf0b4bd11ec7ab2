//! Test all answers - comprehensive solver evaluation
//!
//! Runs the solver against every common word and generates statistics.

use super::GameSetup;
use super::solve::play_game;
use crate::core::Word;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: Word,
    pub guesses: Vec<Word>,
    pub success: bool,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(Word, usize)>,
    pub failed_words: Vec<Word>,
}

/// Play one game per answer word (or the first `limit` of them) in parallel
///
/// Every game gets its own solver, so results do not depend on scheduling.
#[must_use]
pub fn run_test_all(
    setup: &GameSetup,
    answer_words: &[Word],
    limit: Option<usize>,
    show_progress: bool,
) -> TestAllStatistics {
    let test_words = &answer_words[..limit.unwrap_or(answer_words.len()).min(answer_words.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(test_words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let results: Vec<WordTestResult> = test_words
        .par_iter()
        .map(|answer| {
            let result = match play_game(setup.solver(), answer) {
                Ok(game) => WordTestResult {
                    word: *answer,
                    guesses: game.guesses.iter().map(|step| step.word).collect(),
                    success: game.success,
                },
                Err(_) => WordTestResult {
                    word: *answer,
                    guesses: Vec::new(),
                    success: false,
                },
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved {
        *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.guesses.len()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_words: Vec<(Word, usize)> = solved
        .iter()
        .filter(|r| r.guesses.len() >= 5)
        .map(|r| (r.word, r.guesses.len()))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0),
        worst_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word)
            .collect(),
    }
}

/// Print test-all statistics with beautiful formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    let max_rounds = stats.guess_distribution.keys().max().copied().unwrap_or(0);
    for guesses in 1..=max_rounds.max(6) {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (*count * 40 / max_count).max(usize::from(*count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!(
                "  {} ({} guesses)",
                word.text().to_uppercase().yellow(),
                guesses
            );
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        let listed: Vec<String> = stats
            .failed_words
            .iter()
            .take(20)
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("  {}", listed.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameConfig;
    use crate::wordlists::Corpus;

    #[test]
    fn test_all_counts_add_up() {
        let setup = GameSetup::default();
        let stats = run_test_all(&setup, setup.corpus.common(), Some(25), false);

        assert_eq!(stats.total_words, 25);
        assert_eq!(stats.solved + stats.failed, 25);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.solved);
        assert_eq!(stats.failed_words.len(), stats.failed);
    }

    #[test]
    fn test_all_limit_larger_than_list() {
        let setup = GameSetup::default();
        let words = &setup.corpus.common()[..3];
        let stats = run_test_all(&setup, words, Some(100), false);

        assert_eq!(stats.total_words, 3);
    }

    #[test]
    fn test_all_solves_the_opener_in_one() {
        let setup = GameSetup::default();
        let teach = [Word::new("teach").unwrap()];
        let stats = run_test_all(&setup, &teach, None, false);

        assert_eq!(stats.solved, 1);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }

    #[test]
    fn unknown_answers_are_failures() {
        let words = |list: &[&str]| -> Vec<Word> {
            list.iter().map(|w| Word::new(w).unwrap()).collect()
        };
        let corpus = Corpus::new(words(&["lemon", "sound"]), words(&["lemon"]));
        let setup = GameSetup::new(corpus, "ranking", GameConfig::default());
        let stats = run_test_all(&setup, &words(&["zesty"]), None, false);

        assert_eq!(stats.failed, 1);
        assert_eq!(stats.failed_words, words(&["zesty"]));
    }
}
