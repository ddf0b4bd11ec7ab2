//! TUI application state and logic

use crate::commands::GameSetup;
use crate::commands::simple::{Input, parse_input};
use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use crate::solver::{PolicyType, Solver, divisiveness};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub setup: GameSetup,
    pub solver: Solver<PolicyType>,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<Word>,
    /// Marks for the current guess, edited with keys 1-5
    pub tiles: [Mark; WORD_LENGTH],
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub feedback: Feedback,
    pub common_before: usize,
    pub common_after: usize,
    pub legal_before: usize,
    pub legal_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl App {
    #[must_use]
    pub fn new(setup: GameSetup) -> Self {
        let solver = setup.solver();

        Self {
            setup,
            solver,
            history: Vec::new(),
            current_guess: None,
            tiles: [Mark::Absent; WORD_LENGTH],
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Mark each letter with keys 1-5, then press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Or type a pattern ('GY-GY') or compact form ('+t-e~a-c-h')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        }
    }

    /// Ask the solver for the next guess and reset the tiles
    pub fn compute_suggestion(&mut self) {
        self.tiles = [Mark::Absent; WORD_LENGTH];

        match self.solver.next_guess() {
            Ok(guess) => self.current_guess = Some(guess),
            Err(e) => {
                self.current_guess = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Cycle the mark on one tile (0-4): absent, present, correct
    pub fn cycle_tile(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            *tile = tile.cycle();
        }
    }

    /// Submit the typed input, or the tile marks if nothing was typed
    pub fn submit(&mut self) {
        let Some(guess) = self.current_guess else {
            self.add_message("No guess to give feedback on", MessageStyle::Error);
            return;
        };

        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            self.handle_feedback(Feedback::from_marks(&guess, self.tiles));
            return;
        }

        match parse_input(&input, &guess) {
            Input::Feedback(feedback) => self.handle_feedback(feedback),
            Input::Invalid(reason) => self.add_message(&reason, MessageStyle::Error),
            Input::Quit => self.should_quit = true,
            Input::NewGame => self.new_game(),
            Input::Undo => self.undo_last(),
        }
    }

    pub fn handle_feedback(&mut self, feedback: Feedback) {
        let common_before = self.solver.remaining_common().len();
        let legal_before = self.solver.remaining_legal().len();

        self.solver.absorb(&feedback);

        let common_after = self.solver.remaining_common().len();
        let legal_after = self.solver.remaining_legal().len();
        self.history.push(HistoryEntry {
            feedback,
            common_before,
            common_after,
            legal_before,
            legal_after,
        });
        self.input_buffer.clear();

        if feedback.is_solved() {
            self.stats.games_won += 1;
            self.stats.total_games += 1;
            let guess_count = self.history.len();
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }

            self.input_mode = InputMode::WinCelebration;

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };

            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if legal_after == 0 && common_after == 0 {
            self.current_guess = None;
            self.add_message(
                "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                MessageStyle::Error,
            );
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{common_after} common / {legal_after} legal candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    /// True once the final round has been answered without a win
    #[must_use]
    pub fn is_lost(&self) -> bool {
        let won = self.history.last().is_some_and(|entry| entry.feedback.is_solved());
        !won && self.history.len() >= usize::from(self.solver.config().max_rounds)
    }

    pub fn new_game(&mut self) {
        if self.is_lost() {
            self.stats.total_games += 1;
        }
        self.solver = self.setup.solver();
        self.history.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    /// Rebuild the game without its last round
    pub fn undo_last(&mut self) {
        if self.history.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }

        let feedback: Vec<Feedback> = self.history.iter().map(|entry| entry.feedback).collect();
        self.solver = Solver::replay(
            self.setup.policy_type(),
            &self.setup.corpus,
            self.setup.config,
            &feedback,
        );
        self.input_buffer.clear();
        self.input_mode = InputMode::Feedback;
        self.compute_suggestion();
        self.add_message("Undone!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Pool the answer most likely comes from
    #[must_use]
    pub fn answer_pool(&self) -> &[Word] {
        let common = self.solver.remaining_common();
        if common.is_empty() {
            self.solver.remaining_legal()
        } else {
            common
        }
    }

    #[must_use]
    pub fn has_candidates(&self) -> bool {
        !self.solver.remaining_legal().is_empty()
    }

    /// Replace the suggestion with a word of the player's choosing
    pub fn use_manual_word(&mut self) {
        let Ok(word) = Word::new(&self.manual_word) else {
            self.add_message("Invalid word format!", MessageStyle::Error);
            return;
        };

        if !self.setup.corpus.legal().contains(&word) {
            self.add_message(
                &format!("Word '{}' not in legal word list!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let scores = divisiveness::score(self.answer_pool());
        self.add_message(
            &format!(
                "Using: {} ({} distinct letters, divisiveness {:.2})",
                word.text().to_uppercase(),
                word.distinct_letters(),
                scores.word_score(&word)
            ),
            MessageStyle::Success,
        );

        self.current_guess = Some(word);
        self.tiles = [Mark::Absent; WORD_LENGTH];
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    _ => {}
                },
                InputMode::Feedback => handle_feedback_key(&mut app, key.code),
                InputMode::ManualWord => handle_manual_key(&mut app, key.code),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Single-key commands only apply while nothing has been typed
fn handle_feedback_key(app: &mut App, code: KeyCode) {
    let typing = !app.input_buffer.is_empty();

    match code {
        KeyCode::Char('q') if !typing => app.should_quit = true,
        KeyCode::Char('n') if !typing => app.new_game(),
        KeyCode::Char('u') if !typing => app.undo_last(),
        KeyCode::Char(c @ '1'..='5') if !typing => {
            app.cycle_tile(usize::from(c as u8 - b'1'));
        }
        KeyCode::Tab => {
            if app.has_candidates() {
                app.input_mode = InputMode::ManualWord;
                app.add_message("Enter your own word (5 letters)", MessageStyle::Info);
            }
        }
        KeyCode::Char(c) => app.input_buffer.push(c),
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Esc => app.input_buffer.clear(),
        KeyCode::Enter => app.submit(),
        _ => {}
    }
}

fn handle_manual_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Feedback;
            app.manual_word.clear();
            app.add_message("Cancelled manual word entry", MessageStyle::Info);
        }
        KeyCode::Tab => {
            app.input_mode = InputMode::Feedback;
            app.manual_word.clear();
        }
        KeyCode::Char(c) => {
            if app.manual_word.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                app.manual_word.push(c.to_ascii_lowercase());
            }
        }
        KeyCode::Backspace => {
            app.manual_word.pop();
        }
        KeyCode::Enter => {
            if app.manual_word.len() == WORD_LENGTH {
                app.use_manual_word();
            } else {
                app.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameConfig;
    use crate::wordlists::Corpus;

    fn app() -> App {
        let mut app = App::new(GameSetup::default());
        app.compute_suggestion();
        app
    }

    fn text(word: Option<Word>) -> String {
        word.map(|w| w.text().to_string()).unwrap_or_default()
    }

    #[test]
    fn starts_with_opener() {
        let app = app();
        assert_eq!(text(app.current_guess), "teach");
        assert_eq!(app.tiles, [Mark::Absent; WORD_LENGTH]);
    }

    #[test]
    fn tiles_cycle_and_submit() {
        let mut app = app();
        app.cycle_tile(0);
        app.cycle_tile(0);
        app.cycle_tile(1);
        app.cycle_tile(9);
        assert_eq!(app.tiles[0], Mark::Correct);
        assert_eq!(app.tiles[1], Mark::Present);

        app.submit();

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].feedback.to_string(), "+t~e-a-c-h");
        assert!(app.history[0].common_after < app.history[0].common_before);
        assert_eq!(app.tiles, [Mark::Absent; WORD_LENGTH]);
        assert_ne!(text(app.current_guess), "teach");
    }

    #[test]
    fn typed_pattern_is_submitted() {
        let mut app = app();
        app.input_buffer = "-----".to_string();
        app.submit();

        assert_eq!(app.history[0].feedback.to_string(), "-t-e-a-c-h");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn invalid_input_is_reported() {
        let mut app = app();
        app.input_buffer = "GGG".to_string();
        app.submit();

        assert!(app.history.is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn undo_restores_previous_round() {
        let mut app = app();
        let before = app.solver.remaining_common().len();
        app.input_buffer = "-----".to_string();
        app.submit();
        assert!(app.solver.remaining_common().len() < before);

        app.undo_last();

        assert!(app.history.is_empty());
        assert_eq!(app.solver.remaining_common().len(), before);
        assert_eq!(app.solver.round(), 1);
        assert_eq!(text(app.current_guess), "teach");
    }

    #[test]
    fn win_updates_statistics() {
        let mut app = app();
        app.input_buffer = "win".to_string();
        app.submit();

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.history.is_empty());
        assert_eq!(text(app.current_guess), "teach");
    }

    fn short_game() -> App {
        let config = GameConfig {
            max_rounds: 2,
            ..GameConfig::default()
        };
        let mut app = App::new(GameSetup::new(Corpus::embedded(), "ranking", config));
        app.compute_suggestion();
        app
    }

    #[test]
    fn lost_game_counted_once_after_undo_and_win() {
        let mut app = short_game();
        app.input_buffer = "-----".to_string();
        app.submit();
        app.input_buffer = "-----".to_string();
        app.submit();
        assert!(app.is_lost());
        assert_eq!(app.stats.total_games, 0);

        app.undo_last();
        assert!(!app.is_lost());
        app.input_buffer = "win".to_string();
        app.submit();

        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);

        app.new_game();
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn lost_game_counted_when_next_game_starts() {
        let mut app = short_game();
        app.input_buffer = "-----".to_string();
        app.submit();
        app.input_buffer = "-----".to_string();
        app.submit();

        app.new_game();
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        // An unfinished game is not a loss
        app.input_buffer = "-----".to_string();
        app.submit();
        app.new_game();
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn manual_word_replaces_suggestion() {
        let mut app = app();
        app.manual_word = "sound".to_string();
        app.use_manual_word();
        assert_eq!(text(app.current_guess), "sound");

        app.manual_word = "qqqqq".to_string();
        app.use_manual_word();
        assert_eq!(text(app.current_guess), "sound");
    }

    #[test]
    fn contradictory_feedback_clears_suggestion() {
        let mut app = app();
        app.input_buffer = "+q+q+q+q+q".to_string();
        app.submit();

        assert!(app.current_guess.is_none());
        assert!(!app.has_candidates());
    }

    #[test]
    fn feedback_keys_respect_typing() {
        let mut app = app();
        handle_feedback_key(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tiles[1], Mark::Present);

        handle_feedback_key(&mut app, KeyCode::Char('-'));
        handle_feedback_key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_buffer, "-n");
        assert!(!app.should_quit);
    }
}
