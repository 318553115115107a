//! Hangman
//!
//! A terminal word-guessing game with difficulty tiers, scoring, a one-time
//! hint and a user-extensible word list.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{SecretWord, Tier};
//! use hangman::game::{GameSession, RoundState};
//!
//! let mut session = GameSession::new(Tier::Easy, SecretWord::new("book").unwrap());
//! for letter in ["z", "b", "o", "k"] {
//!     session.guess(letter);
//! }
//!
//! assert_eq!(session.state(), RoundState::Won);
//! assert_eq!(session.final_score(), 120);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
