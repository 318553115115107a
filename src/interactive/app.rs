//! TUI application state and logic

use crate::core::{SecretWord, Tier};
use crate::game::{GameSession, GuessOutcome, RoundState, Statistics};
use crate::wordlists::choose_word;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Longest guess the input line accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App {
    pub storage: PathBuf,
    pub fixed_tier: Option<Tier>,
    pub selected_tier: Tier,
    pub session: Option<GameSession>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    TierSelect,
    Guessing,
    HintOffer,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// New application; a fixed tier skips the selection screen between rounds
    #[must_use]
    pub fn new(storage: impl Into<PathBuf>, fixed_tier: Option<Tier>) -> Self {
        Self {
            storage: storage.into(),
            fixed_tier,
            selected_tier: fixed_tier.unwrap_or(Tier::Easy),
            session: None,
            input_mode: InputMode::TierSelect,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to Hangman! Pick a difficulty and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn select_next_tier(&mut self) {
        let tiers: Vec<Tier> = Tier::iter().collect();
        let index = tiers.iter().position(|&t| t == self.selected_tier).unwrap_or(0);
        self.selected_tier = tiers[(index + 1) % tiers.len()];
    }

    pub fn select_previous_tier(&mut self) {
        let tiers: Vec<Tier> = Tier::iter().collect();
        let index = tiers.iter().position(|&t| t == self.selected_tier).unwrap_or(0);
        self.selected_tier = tiers[(index + tiers.len() - 1) % tiers.len()];
    }

    /// Draw a word for the selected tier and start playing it
    pub fn start_round(&mut self) {
        match choose_word(self.selected_tier, &self.storage) {
            Ok(secret) => self.begin_round(secret),
            Err(e) => {
                warn!("Could not start round: {e}");
                self.add_message(&format!("Could not load words: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Start a round on a known word
    pub fn begin_round(&mut self, secret: SecretWord) {
        debug!("Starting a {} round", self.selected_tier);
        let letters = secret.text().chars().count();
        self.session = Some(GameSession::new(self.selected_tier, secret));
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New {} round: {letters} characters to uncover.", self.selected_tier),
            MessageStyle::Info,
        );
        self.sync_mode();
    }

    /// Leave a finished round
    pub fn new_round(&mut self) {
        self.session = None;
        self.input_buffer.clear();
        if self.fixed_tier.is_some() {
            self.start_round();
        } else {
            self.input_mode = InputMode::TierSelect;
            self.add_message("Pick a difficulty and press Enter.", MessageStyle::Info);
        }
    }

    /// Apply the contents of the input line as a guess
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let turn = session.guess(&guess);
        let style = if turn.outcome.costs_attempt() {
            MessageStyle::Error
        } else if matches!(turn.outcome, GuessOutcome::WordGuessed | GuessOutcome::Correct(_)) {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        self.add_message(&turn.outcome.to_string(), style);
        self.sync_mode();
    }

    /// Answer the pending hint offer
    pub fn answer_hint(&mut self, accept: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.resolve_hint(accept) {
            Some(letter) => self.add_message(
                &format!("Hint used! Revealed the letter '{letter}'."),
                MessageStyle::Success,
            ),
            None => self.add_message("Hint declined.", MessageStyle::Info),
        }
        self.sync_mode();
    }

    /// Move to the input mode the session calls for
    fn sync_mode(&mut self) {
        let Some(session) = self.session.as_ref() else {
            self.input_mode = InputMode::TierSelect;
            return;
        };

        if session.state().is_over() {
            if self.input_mode != InputMode::RoundOver {
                let summary = session.summary();
                self.stats.record(&summary);
                let (text, style) = if summary.state == RoundState::Won {
                    (
                        format!(
                            "🎉 You got it! The word was '{}'. Final score: {}",
                            summary.word, summary.final_score
                        ),
                        MessageStyle::Success,
                    )
                } else {
                    (
                        format!(
                            "💀 Game over! The word was '{}'. Final score: {}",
                            summary.word, summary.final_score
                        ),
                        MessageStyle::Error,
                    )
                };
                self.add_message(&text, style);
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            self.input_mode = InputMode::RoundOver;
        } else if session.hint_available() {
            if self.input_mode != InputMode::HintOffer {
                self.add_message(
                    "Running low! Reveal a letter with your one hint? (y/n)",
                    MessageStyle::Info,
                );
            }
            self.input_mode = InputMode::HintOffer;
        } else {
            self.input_mode = InputMode::Guessing;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let stats = res?;
    if stats.rounds_played > 0 {
        println!("{}", crate::output::statistics_report(&stats));
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    if app.fixed_tier.is_some() {
        app.start_round();
    }

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                code => handle_key(&mut app, code),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.input_mode {
        InputMode::TierSelect => match code {
            KeyCode::Up | KeyCode::Left => app.select_previous_tier(),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => app.select_next_tier(),
            KeyCode::Char('e' | 'E') => app.selected_tier = Tier::Easy,
            KeyCode::Char('m' | 'M') => app.selected_tier = Tier::Medium,
            KeyCode::Char('h' | 'H') => app.selected_tier = Tier::Hard,
            KeyCode::Char('q' | 'Q') => app.should_quit = true,
            KeyCode::Enter => app.start_round(),
            _ => {}
        },
        InputMode::Guessing => match code {
            KeyCode::Char(c) => {
                if app.input_buffer.chars().count() < MAX_INPUT_LEN {
                    app.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Enter => app.submit_guess(),
            _ => {}
        },
        InputMode::HintOffer => match code {
            KeyCode::Char('y' | 'Y') => app.answer_hint(true),
            KeyCode::Char('n' | 'N') => app.answer_hint(false),
            _ => {}
        },
        InputMode::RoundOver => match code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => app.new_round(),
            KeyCode::Char('q' | 'Q') => app.should_quit = true,
            _ => {}
        },
    }
}
