//! Display functions for command results

use super::formatters::{divisiveness_bar, feedback_to_colored};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{Word, letter};
use crate::solver::MAX_SCORE;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            feedback_to_colored(&step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!("  Feedback:   {}", step.feedback);
            println!(
                "  Common:     {} → {}",
                step.common_before, step.common_after
            );
            println!("  Legal:      {} → {}", step.legal_before, step.legal_after);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DIVISIVENESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} common words:", result.pool_size);
    println!("   Distinct letters: {}", result.distinct_letters);
    println!(
        "   Divisiveness:     {}",
        format_score(result.divisiveness).bright_yellow()
    );
    match result.rank {
        Some(rank) => println!("   Rank:             {rank} of {}", result.pool_size),
        None => println!("   Rank:             {}", "not a common word".bright_black()),
    }

    println!("\n🔤 {}", "Letter scores:".bright_cyan().bold());
    for (letter, score) in result.letter_scores.ranked() {
        let appearances = result.letter_scores.appearances(letter);
        if appearances == 0 {
            continue;
        }
        let bar = divisiveness_bar(score, MAX_SCORE, 30);
        let label = (letter as char).to_string();
        let label = if result.word.has_letter(letter) {
            label.bright_yellow().bold()
        } else {
            label.normal()
        };
        println!(
            "   {label} [{}] {:>5} words  {}",
            bar.green(),
            appearances,
            format_score(score)
        );
    }
    let unused: String = letter::alphabet()
        .filter(|&l| result.letter_scores.appearances(l) == 0)
        .map(char::from)
        .collect();
    if !unused.is_empty() {
        println!("   {} {unused}", "Absent from pool:".bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(&usize, &usize)> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (guess_count, &count) in counts {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print a ranked word list, one word per line, ready to store as a data file
pub fn print_ranked_words(words: &[Word]) {
    for word in words {
        println!("{word}");
    }
}

/// Scores at the even-split sentinel print as "max"
fn format_score(score: f64) -> String {
    if score >= MAX_SCORE {
        let splits = (score / MAX_SCORE).floor();
        let rest = score - splits * MAX_SCORE;
        if splits > 1.0 {
            format!("{splits:.0}×max + {rest:.3}")
        } else {
            format!("max + {rest:.3}")
        }
    } else {
        format!("{score:.3}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_plain_score() {
        assert_eq!(format_score(0.5), "0.500");
    }

    #[test]
    fn format_sentinel_scores() {
        assert_eq!(format_score(MAX_SCORE), "max + 0.000");
        assert_eq!(format_score(3.0 * MAX_SCORE + 2.0), "3×max + 2.000");
    }
}
