//! TUI rendering with ratatui
//!
//! Visualizations for the solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, Mark, Word};
use crate::solver::divisiveness;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORD ELIMINATOR - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current guess tiles
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn mark_style(mark: Mark) -> Style {
    let (bg, fg) = match mark {
        Mark::Correct => (Color::Green, Color::Black),
        Mark::Present => (Color::Yellow, Color::Black),
        Mark::Absent => (Color::DarkGray, Color::White),
    };
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

fn tile_spans(letters: impl Iterator<Item = (u8, Mark)>) -> Vec<Span<'static>> {
    letters
        .flat_map(|(letter, mark)| {
            [
                Span::styled(
                    format!(" {} ", (letter as char).to_ascii_uppercase()),
                    mark_style(mark),
                ),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn feedback_spans(feedback: &Feedback) -> Vec<Span<'static>> {
    tile_spans(feedback.cells().iter().map(|cell| (cell.letter, cell.mark)))
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Round {} ", app.solver.round()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = app.current_guess else {
        let paragraph = Paragraph::new("No suggestion available").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                guess.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} distinct letters)", guess.distinct_letters()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(tile_spans(guess.chars().iter().copied().zip(app.tiles))),
        Line::from(Span::styled(
            " 1   2   3   4   5",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let common = app.solver.remaining_common();
    let legal = app.solver.remaining_legal();
    let pool = app.answer_pool();

    let content = if legal.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if pool.len() <= 12 {
        let scores = divisiveness::score(pool);

        let mut lines = vec![Line::from(vec![
            Span::raw("Remaining: "),
            Span::styled("🟢", Style::default().fg(Color::Green)),
            Span::raw(" = common  "),
            Span::styled("⚪", Style::default().fg(Color::White)),
            Span::raw(" = legal only"),
        ])];

        for candidate in pool {
            let (prefix, style) = if common.contains(candidate) {
                ("🟢", Style::default().fg(Color::Green))
            } else {
                ("⚪", Style::default().fg(Color::DarkGray))
            };

            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::raw(prefix),
                Span::raw(" "),
                Span::styled(format!("{:<5}", candidate.text().to_uppercase()), style),
                Span::styled(
                    format!(" {}L {}", candidate.distinct_letters(), score_label(&scores, candidate)),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines
    } else {
        vec![
            Line::from(format!("{} common candidates", common.len())),
            Line::from(format!("{} legal candidates", legal.len())),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn score_label(scores: &divisiveness::LetterScores, word: &Word) -> String {
    let score = scores.word_score(word);
    let splits = (score / divisiveness::MAX_SCORE).floor();
    if splits >= 1.0 {
        format!("{splits:.0} even splits")
    } else {
        format!("{score:.2}")
    }
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .take(6)
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(feedback_spans(&entry.feedback));
            spans.push(Span::raw(format!(
                " {} → {}",
                entry.common_before, entry.common_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Elimination gauge
            Constraint::Percentage(40), // Knowledge
            Constraint::Min(3),     // Messages
        ])
        .split(area);

    render_elimination(f, app, chunks[0]);
    render_knowledge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_elimination(f: &mut Frame, app: &App, area: Rect) {
    let total = app.setup.corpus.legal().len();
    let remaining = app.solver.remaining_legal().len();
    let eliminated = total - remaining;
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(eliminated * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{eliminated}/{total} | {remaining} remain"));

    f.render_widget(gauge, area);
}

fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let knowledge = app.solver.knowledge();

    let mut vague: Vec<String> = knowledge
        .vague()
        .iter()
        .map(|fact| format!("{}@{}", fact.letter as char, fact.position + 1))
        .collect();
    vague.sort();

    let counts: Vec<String> = knowledge
        .counts()
        .map(|(letter, count)| format!("{}×{count}", letter as char))
        .collect();

    let content = vec![
        Line::from(vec![
            Span::raw("Pinned:   "),
            Span::styled(knowledge.pinned(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Not here: "),
            Span::styled(vague.join(" "), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Absent:   "),
            Span::styled(
                knowledge.absent().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("Counts:   {}", counts.join(" "))),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Knowledge ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Keys 1-5 mark tiles, or type G/Y/- or +t-e~a-c-h | Enter submits | TAB manual word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try (5 letters) | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let policy = Paragraph::new(format!("Policy: {}", app.setup.policy)).alignment(Alignment::Center);
    f.render_widget(policy, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.answer_pool().len());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.has_candidates() {
        "q: Quit | n: New | u: Undo | Enter: Submit"
    } else {
        "q: Quit | n: New Game | u: Undo"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
