//! Game session state machine
//!
//! `GameSession` implements the guess, reveal and scoring rules of one round.
//! Drivers feed it raw guesses and hint answers and render the `Turn`s it
//! returns.

mod outcome;
mod session;
mod stats;

pub use outcome::{GuessOutcome, RoundState, Turn};
pub use session::{
    GameSession, HINT_THRESHOLD, RoundSummary, SCORE_DELTA, STARTING_ATTEMPTS, STARTING_SCORE,
};
pub use stats::Statistics;
