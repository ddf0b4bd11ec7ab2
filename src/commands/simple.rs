//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use super::GameSetup;
use crate::core::{Feedback, Word};
use crate::output::formatters::{feedback_to_colored, mark_legend};
use crate::solver::{PolicyType, Solver, SolverError};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player typed after a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    NewGame,
    Undo,
    Feedback(Feedback),
    Invalid(String),
}

/// Interpret one line of input for the suggested `guess`
///
/// Accepts a five-symbol pattern (`GY-GY`, `gy_gy`, emoji squares), the compact
/// form (`+t-e~a-c-h`), `win`, or a command.
#[must_use]
pub fn parse_input(line: &str, guess: &Word) -> Input {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        "win" | "correct" | "yes" | "solved" => Input::Feedback(Feedback::solved(guess)),
        _ => {
            let parsed = Feedback::from_pattern(guess, trimmed).or_else(|_| trimmed.parse());
            match parsed {
                Ok(feedback) => Input::Feedback(feedback),
                Err(e) => Input::Invalid(e.to_string()),
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(setup: &GameSetup) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Word Eliminator - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the feedback pattern:\n");
    println!("{}", mark_legend());
    println!("  - Or the compact form, e.g. +t-e~a-c-h");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut history: Vec<Feedback> = Vec::new();
    let mut solver = setup.solver();

    loop {
        let guess = match solver.next_guess() {
            Ok(guess) => guess,
            Err(e) => {
                println!("\n❌ {e}");
                match e {
                    SolverError::NoCandidates => {
                        println!("Your feedback may be incorrect.");
                    }
                    _ => println!("Out of guesses."),
                }
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                let Some(line) = prompt(&mut lines, "Command")? else {
                    return Ok(());
                };
                match line.to_lowercase().as_str() {
                    "undo" | "u" => undo(setup, &mut solver, &mut history),
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => new_game(setup, &mut solver, &mut history),
                }
                continue;
            }
        };

        print_turn(&solver, &guess);

        let feedback = loop {
            let Some(line) = prompt(&mut lines, "Enter feedback (G/Y/-, 'win', or command)")?
            else {
                return Ok(());
            };

            match parse_input(&line, &guess) {
                Input::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Input::NewGame => {
                    new_game(setup, &mut solver, &mut history);
                    break None;
                }
                Input::Undo => {
                    // Drop the pending suggestion as well as the last absorbed round
                    undo(setup, &mut solver, &mut history);
                    break None;
                }
                Input::Feedback(feedback) => break Some(feedback),
                Input::Invalid(reason) => println!("❌ {reason}\n"),
            }
        };

        let Some(feedback) = feedback else {
            continue;
        };

        history.push(feedback);
        solver.absorb(&feedback);

        if feedback.is_solved() {
            print_victory(&history);

            match prompt(&mut lines, "Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => new_game(setup, &mut solver, &mut history),
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn print_turn(solver: &Solver<PolicyType>, guess: &Word) {
    let common = solver.remaining_common();
    let legal = solver.remaining_legal();

    println!("────────────────────────────────────────────────────────────");
    println!(
        "Turn {}: {} common / {} legal candidates",
        solver.round(),
        common.len(),
        legal.len()
    );
    println!("────────────────────────────────────────────────────────────");

    if !solver.knowledge().is_empty() {
        println!("Known: {}", solver.knowledge());
    }
    println!(
        "\n📊 Suggested guess: {}\n",
        guess.text().to_uppercase().bright_yellow().bold()
    );

    let pool = if common.is_empty() { legal } else { common };
    if (1..=10).contains(&pool.len()) {
        println!("Remaining candidates:");
        for candidate in pool {
            println!("  • {}", candidate.text().to_uppercase());
        }
        println!();
    }
}

fn print_victory(history: &[Feedback]) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!("{}", "    🎉  S O L V E D !  🎉    ".bright_green().bold());
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        history.len().to_string().bright_cyan().bold(),
        if history.len() == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, feedback) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            feedback_to_colored(feedback),
            feedback.to_emoji()
        );
    }

    println!("\n{}\n", "═".repeat(70).bright_cyan());
}

fn new_game(setup: &GameSetup, solver: &mut Solver<PolicyType>, history: &mut Vec<Feedback>) {
    history.clear();
    *solver = setup.solver();
    println!("\n🔄 New game started!\n");
}

fn undo(setup: &GameSetup, solver: &mut Solver<PolicyType>, history: &mut Vec<Feedback>) {
    if history.pop().is_some() {
        println!("✓ Undone! Back to turn {}\n", history.len() + 1);
    } else {
        println!("Nothing to undo!\n");
    }
    *solver = Solver::replay(setup.policy_type(), &setup.corpus, setup.config, history);
}

/// Print `label` and read one trimmed line; `None` at end of input
fn prompt<I>(lines: &mut I, label: &str) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{label}: ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
