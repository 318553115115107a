//! Round state machine
//!
//! A `GameSession` owns everything that changes during one round and exposes
//! the guess/hint transitions. It never reads input or prints; the text and
//! TUI drivers both sit on top of it.

use super::outcome::{GuessOutcome, RoundState, Turn};
use crate::core::{SecretWord, Tier};
use log::info;
use rustc_hash::FxHashSet;

/// Attempts available at the start of a round
pub const STARTING_ATTEMPTS: u32 = 6;

/// Score at the start of a round
pub const STARTING_SCORE: i32 = 100;

/// Points gained for a hit and lost for a miss, for every tier
pub const SCORE_DELTA: i32 = 10;

/// The hint is offered once attempts left drop to this value
pub const HINT_THRESHOLD: u32 = 3;

/// Mutable state of a single round
#[derive(Debug, Clone)]
pub struct GameSession {
    tier: Tier,
    secret: SecretWord,
    guessed: FxHashSet<char>,
    misses: Vec<char>,
    attempts_left: u32,
    score: i32,
    hint_offered: bool,
    hint_used: bool,
    state: RoundState,
}

/// End-of-round record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub tier: Tier,
    pub word: String,
    pub state: RoundState,
    pub final_score: i32,
    pub misses: usize,
    pub hint_used: bool,
}

impl GameSession {
    /// Start a round for `secret`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{SecretWord, Tier};
    /// use hangman::game::{GameSession, GuessOutcome, RoundState};
    ///
    /// let mut session = GameSession::new(Tier::Easy, SecretWord::new("book").unwrap());
    /// assert_eq!(session.guess("z").outcome, GuessOutcome::Wrong('z'));
    /// assert_eq!(session.guess("book").state, RoundState::Won);
    /// assert_eq!(session.final_score(), 90);
    /// ```
    #[must_use]
    pub fn new(tier: Tier, secret: SecretWord) -> Self {
        Self {
            tier,
            secret,
            guessed: FxHashSet::default(),
            misses: Vec::new(),
            attempts_left: STARTING_ATTEMPTS,
            score: STARTING_SCORE,
            hint_offered: false,
            hint_used: false,
            state: RoundState::InProgress,
        }
    }

    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Letters revealed so far, by guess or by hint
    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// Missed letters in the order they were tried (repeats included)
    #[must_use]
    pub fn misses(&self) -> &[char] {
        &self.misses
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Running score; may dip below zero while the round is in progress
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Score reported to the player: the running score, or 0 once lost
    #[must_use]
    pub const fn final_score(&self) -> i32 {
        match self.state {
            RoundState::Lost => 0,
            RoundState::InProgress | RoundState::Won => self.score,
        }
    }

    /// Whether the driver should offer the hint before the next guess
    #[must_use]
    pub const fn hint_available(&self) -> bool {
        matches!(self.state, RoundState::InProgress)
            && self.attempts_left <= HINT_THRESHOLD
            && !self.hint_offered
    }

    /// Answer the hint offer
    ///
    /// Accepting reveals the first unguessed letter of the word, reading left
    /// to right, and returns it. Declining forfeits the offer. Either way the
    /// offer is not made again this round, and score and attempts are
    /// untouched. Returns `None` if no offer was pending or it was declined.
    pub fn resolve_hint(&mut self, accept: bool) -> Option<char> {
        if !self.hint_available() {
            return None;
        }
        self.hint_offered = true;

        if !accept {
            return None;
        }

        let letter = self.secret.first_unrevealed(&self.guessed)?;
        self.guessed.insert(letter);
        self.hint_used = true;

        if self.secret.is_revealed_by(&self.guessed) {
            self.state = RoundState::Won;
        }

        Some(letter)
    }

    /// Apply one guess
    ///
    /// The input is trimmed and lower-cased. A full-word match wins at once.
    /// A single alphabetic character reveals, repeats, or misses. Anything
    /// else is rejected without cost. After a non-word guess the round is won
    /// when every letter is revealed, and lost when no attempts remain.
    pub fn guess(&mut self, raw: &str) -> Turn {
        if self.state.is_over() {
            return self.turn(GuessOutcome::RoundOver);
        }

        let guess = raw.trim().to_lowercase();

        if guess == self.secret.text() {
            self.state = RoundState::Won;
            info!("Word '{}' guessed with score {}", self.secret, self.score);
            return self.turn(GuessOutcome::WordGuessed);
        }

        let outcome = match single_letter(&guess) {
            Some(letter) if self.guessed.contains(&letter) => GuessOutcome::AlreadyGuessed(letter),
            Some(letter) if self.secret.has_letter(letter) => {
                self.guessed.insert(letter);
                self.score += SCORE_DELTA;
                GuessOutcome::Correct(letter)
            }
            Some(letter) => {
                self.attempts_left = self.attempts_left.saturating_sub(1);
                self.score -= SCORE_DELTA;
                self.misses.push(letter);
                GuessOutcome::Wrong(letter)
            }
            None => GuessOutcome::Invalid,
        };

        if self.secret.is_revealed_by(&self.guessed) {
            self.state = RoundState::Won;
            info!("Word '{}' revealed with score {}", self.secret, self.score);
        } else if self.attempts_left == 0 {
            self.state = RoundState::Lost;
            info!("Out of attempts on '{}'", self.secret);
        }

        self.turn(outcome)
    }

    /// Summarize the round as it stands
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            tier: self.tier,
            word: self.secret.text().to_string(),
            state: self.state,
            final_score: self.final_score(),
            misses: self.misses.len(),
            hint_used: self.hint_used,
        }
    }

    const fn turn(&self, outcome: GuessOutcome) -> Turn {
        Turn {
            outcome,
            state: self.state,
        }
    }
}

/// The guess as a letter, if it is exactly one alphabetic character
fn single_letter(guess: &str) -> Option<char> {
    let mut chars = guess.chars();
    let letter = chars.next()?;
    (chars.next().is_none() && letter.is_alphabetic()).then_some(letter)
}
