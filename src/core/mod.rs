//! Core domain types for Hangman
//!
//! Difficulty tiers and secret words. Everything here is pure and free of I/O.

mod tier;
mod word;

pub use tier::{InvalidTierError, Tier};
pub use word::{SecretWord, WordError};
