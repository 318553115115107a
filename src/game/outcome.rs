//! Round states and per-guess feedback

use std::fmt;

/// Lifecycle state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// Won and Lost accept no further transitions
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a single guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The whole word was typed correctly
    WordGuessed,
    /// The letter occurs in the word and has been revealed
    Correct(char),
    /// The letter does not occur in the word
    Wrong(char),
    /// The letter had already been revealed
    AlreadyGuessed(char),
    /// Neither a single letter nor the word
    Invalid,
    /// The round had already ended
    RoundOver,
}

impl GuessOutcome {
    /// Whether the guess used up one of the remaining attempts
    #[must_use]
    pub const fn costs_attempt(self) -> bool {
        matches!(self, Self::Wrong(_))
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordGuessed => write!(f, "Congratulations! You guessed the word correctly."),
            Self::Correct(_) => write!(f, "Good guess!"),
            Self::Wrong(_) => write!(f, "Wrong guess!"),
            Self::AlreadyGuessed(letter) => write!(f, "You already guessed '{letter}'."),
            Self::Invalid => write!(f, "Invalid input. Enter a single letter or the full word."),
            Self::RoundOver => write!(f, "This round is already over."),
        }
    }
}

/// Result of applying one guess: the feedback plus the state it left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub outcome: GuessOutcome,
    pub state: RoundState,
}
