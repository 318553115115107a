//! TUI rendering with ratatui
//!
//! Screens for tier selection, guessing and the end of a round.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Tier;
use crate::game::{GameSession, RoundState, STARTING_ATTEMPTS};
use crate::output::mask_word;
use crate::wordlists::builtin_words;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
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

    match app.session.as_ref() {
        Some(session) if app.input_mode != InputMode::TierSelect => {
            render_round_panel(f, session, main_chunks[0]);
        }
        _ => render_tier_select(f, app, main_chunks[0]),
    }
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_tier_select(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Tier::iter()
        .map(|tier| {
            let selected = tier == app.selected_tier;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "{marker}{tier:<8} {} built-in words",
                builtin_words(tier).len()
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Choose Difficulty (↑/↓ or E/M/H, Enter to start) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_round_panel(f: &mut Frame, session: &GameSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Word
            Constraint::Percentage(45), // Alphabet
        ])
        .split(area);

    render_word(f, session, chunks[0]);
    render_alphabet(f, session, chunks[1]);
}

fn render_word(f: &mut Frame, session: &GameSession, area: Rect) {
    let masked = match session.state() {
        RoundState::InProgress | RoundState::Won => mask_word(session.secret(), session.guessed()),
        RoundState::Lost => session
            .secret()
            .text()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" "),
    };

    let word_color = match session.state() {
        RoundState::InProgress => Color::White,
        RoundState::Won => Color::Green,
        RoundState::Lost => Color::Red,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            masked,
            Style::default()
                .fg(word_color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!(
            "{} • {} distinct letters",
            session.tier(),
            session.secret().letter_count()
        ))
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Secret Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_alphabet(f: &mut Frame, session: &GameSession, area: Rect) {
    let letter_span = |c: char| {
        let style = if session.guessed().contains(&c) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if session.misses().contains(&c) {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("{} ", c.to_ascii_uppercase()), style)
    };

    let content = vec![
        Line::from(""),
        Line::from(('a'..='m').map(letter_span).collect::<Vec<_>>()).alignment(Alignment::Center),
        Line::from(('n'..='z').map(letter_span).collect::<Vec<_>>()).alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(3), // Score
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app
        .session
        .as_ref()
        .map_or(STARTING_ATTEMPTS, GameSession::attempts_left);

    let color = match attempts {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(attempts) / f64::from(STARTING_ATTEMPTS))
        .label(format!("{attempts} / {STARTING_ATTEMPTS} left"));

    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.session.as_ref() {
        Some(session) if session.state().is_over() => {
            format!("Final score: {}", session.final_score())
        }
        Some(session) => {
            let hint = if session.hint_used() { " (hint used)" } else { "" };
            format!("Score: {}{hint}", session.score())
        }
        None => "Score: -".to_string(),
    };

    let score = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(score, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        InputMode::TierSelect => (" Select a difficulty ", "", Color::Cyan),
        InputMode::Guessing => (
            " Enter a letter or the full word | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::HintOffer => (" Use your hint? Y = yes, N = no ", "", Color::Magenta),
        InputMode::RoundOver => (" Round over | N: new round, Q: quit ", "", Color::Green),
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
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let best_text = app
        .stats
        .best_score
        .map_or_else(|| "Best: -".to_string(), |best| format!("Best: {best}"));
    let best = Paragraph::new(best_text).alignment(Alignment::Center);
    f.render_widget(best, chunks[1]);

    let help = Paragraph::new("Esc / Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
