//! Text blocks for the line-based interface

use super::formatters::{create_progress_bar, mask_word, sorted_letters};
use crate::core::Tier;
use crate::game::{GameSession, GuessOutcome, RoundState, STARTING_ATTEMPTS, Statistics};
use crate::wordlists::WordBank;
use colored::Colorize;
use std::fmt::Write;
use strum::IntoEnumIterator;

/// Opening banner
#[must_use]
pub fn welcome_banner() -> String {
    format!(
        "\n{}\n{}\n{}",
        "═".repeat(50).cyan(),
        "               Welcome to Hangman!".bright_yellow().bold(),
        "═".repeat(50).cyan()
    )
}

/// Masked word, attempts and score before a guess
#[must_use]
pub fn round_status(session: &GameSession) -> String {
    let mut status = format!(
        "\nWord: {}\nAttempts left: {} | Score: {}  [{}]",
        mask_word(session.secret(), session.guessed()).bright_white().bold(),
        session.attempts_left(),
        session.score(),
        create_progress_bar(session.attempts_left(), STARTING_ATTEMPTS, 12)
    );

    if !session.misses().is_empty() {
        let _ = write!(status, "\nMissed: {}", sorted_letters(session.misses()).red());
    }

    status
}

/// Line shown after the hint reveals a letter
#[must_use]
pub fn hint_revealed(session: &GameSession) -> String {
    format!(
        "Hint used! A letter has been revealed: {}",
        mask_word(session.secret(), session.guessed()).bright_white().bold()
    )
}

/// Feedback for one guess
#[must_use]
pub fn turn_feedback(outcome: GuessOutcome) -> String {
    let text = outcome.to_string();
    match outcome {
        GuessOutcome::WordGuessed => text.bright_green().bold().to_string(),
        GuessOutcome::Correct(_) => text.green().to_string(),
        GuessOutcome::Wrong(_) => text.red().to_string(),
        GuessOutcome::AlreadyGuessed(_) | GuessOutcome::Invalid | GuessOutcome::RoundOver => {
            text.yellow().to_string()
        }
    }
}

/// Closing line of a round, with the reported score
#[must_use]
pub fn round_result(session: &GameSession) -> String {
    let word = session.secret().text();
    let score = session.final_score();

    match session.state() {
        RoundState::Won => format!(
            "{} The word was '{}'. Your final score: {}",
            "Well done!".bright_green().bold(),
            word.bright_yellow(),
            score.to_string().bright_cyan().bold()
        ),
        RoundState::Lost => format!(
            "{} The word was '{}'. Your final score: {}",
            "Game over!".red().bold(),
            word.bright_yellow(),
            score
        ),
        RoundState::InProgress => format!("Round in progress. Score so far: {score}"),
    }
}

/// Statistics for every round played in this process
#[must_use]
pub fn statistics_report(stats: &Statistics) -> String {
    let mut report = format!(
        "\n{}\n   Rounds played: {}\n   Rounds won:    {} ({:.0}%)",
        "Session statistics".bright_cyan().bold(),
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );

    if let Some(best) = stats.best_score {
        let _ = write!(
            report,
            "\n   Best score:    {best}\n   Average score: {:.1}",
            stats.average_score()
        );
    }

    report
}

/// Word bank contents, one block per tier
#[must_use]
pub fn word_bank_listing(bank: &WordBank, only: Option<Tier>) -> String {
    let mut listing = String::new();

    for tier in Tier::iter().filter(|tier| only.is_none_or(|only| only == *tier)) {
        let words = bank.words(tier);
        let _ = writeln!(
            listing,
            "{} ({} words)",
            tier.to_string().bright_cyan().bold(),
            words.len()
        );
        for word in words {
            let _ = writeln!(listing, "  • {word}");
        }
    }

    listing
}
