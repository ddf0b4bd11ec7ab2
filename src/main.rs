//! Word Eliminator - CLI
//!
//! Candidate-elimination solver for five-letter word puzzles, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_eliminator::{
    commands::{
        GameSetup, analyze_word, pick_targets, print_test_all_statistics, rank_file,
        run_benchmark, run_simple, run_test_all, solve_word,
    },
    output::{
        print_analysis_result, print_benchmark_result, print_ranked_words, print_solve_result,
    },
    solver::{GameConfig, PolicyType},
    wordlists::{Corpus, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_eliminator",
    about = "Five-letter word puzzle solver that ranks candidates by letter variety and divisiveness",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess policy: ranking (default) or indicator
    #[arg(short, long, global = true, default_value = "ranking", value_parser = PolicyType::NAMES)]
    policy: String,

    /// Legal word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Opening word played in round 1
    #[arg(short, long, global = true)]
    opener: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show pool sizes before and after every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show a word's letter variety, divisiveness and rank
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of common words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Sample the words at random instead of taking the first N
        #[arg(short, long)]
        random: bool,
    },

    /// Test solver on every common word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Sort a word file by letter variety
    Rank {
        /// File with one word per line
        file: PathBuf,

        /// Keep only words also present in this file
        #[arg(short, long)]
        against: Option<PathBuf>,
    },
}

/// Build the corpus from the -w flag
///
/// - "embedded": the built-in legal and common lists
/// - "<path>": legal words from the file; common words are the built-in ones it contains
fn load_corpus(wordlist: &str) -> Result<Corpus> {
    if wordlist == "embedded" {
        return Ok(Corpus::embedded());
    }

    let legal = load_from_file(wordlist).with_context(|| format!("Failed to load {wordlist}"))?;
    let common = Corpus::embedded().common().to_vec();
    Ok(Corpus::ranked(legal, common))
}

fn load_config(opener: Option<&str>) -> Result<GameConfig> {
    match opener {
        Some(word) => GameConfig::with_opener(word)
            .with_context(|| format!("Invalid opening word '{word}'")),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Rank { file, against } = &command {
        return run_rank_command(file, against.as_deref());
    }

    let setup = GameSetup::new(
        load_corpus(&cli.wordlist)?,
        &cli.policy,
        load_config(cli.opener.as_deref())?,
    );

    match command {
        Commands::Play => run_play_command(setup),
        Commands::Simple => run_simple(&setup),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&word, &setup)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &setup.corpus)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, random } => {
            run_benchmark_command(&setup, count, random);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&setup, limit);
            Ok(())
        }
        Commands::Rank { .. } => Ok(()),
    }
}

fn run_benchmark_command(setup: &GameSetup, count: usize, random: bool) {
    let sampling = if random { "random" } else { "first" };
    println!("Running benchmark on {count} {sampling} common words...");

    let targets = pick_targets(setup.corpus.common(), count, random);
    let result = run_benchmark(setup, &targets);
    print_benchmark_result(&result);
}

fn run_test_all_command(setup: &GameSetup, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} common words",
        setup.corpus.common().len()
    );
    println!("Policy: {}", setup.policy);
    println!("Opener: {}", setup.config.opening_word);
    println!();

    let stats = run_test_all(setup, setup.corpus.common(), limit, true);
    print_test_all_statistics(&stats);
}

fn run_rank_command(file: &Path, against: Option<&Path>) -> Result<()> {
    let ranked = rank_file(file, against)?;
    print_ranked_words(&ranked);
    Ok(())
}

fn run_play_command(setup: GameSetup) -> Result<()> {
    use wordle_eliminator::interactive::{App, run_tui};

    run_tui(App::new(setup))
}
