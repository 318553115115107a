//! Difficulty tiers
//!
//! A tier bounds which words are eligible for a round. The stored form is the
//! capitalized name (`Easy`, `Medium`, `Hard`); operator input is capitalized
//! before matching, so `hARD` selects `Hard`.

use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// Difficulty category of a secret word
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

/// Raised when text does not name one of the three tiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid difficulty '{0}', expected Easy, Medium or Hard")]
pub struct InvalidTierError(pub String);

impl Tier {
    /// Parse a tier exactly as it appears in word storage (case-sensitive)
    ///
    /// # Errors
    /// Returns `InvalidTierError` unless `name` is `Easy`, `Medium` or `Hard`.
    pub fn from_stored(name: &str) -> Result<Self, InvalidTierError> {
        Self::from_str(name).map_err(|_| InvalidTierError(name.to_string()))
    }

    /// Parse a tier typed by the operator
    ///
    /// Surrounding whitespace is ignored and the text is capitalized before
    /// matching, so any casing of a tier name is accepted.
    ///
    /// # Errors
    /// Returns `InvalidTierError` if the capitalized text is not a tier name.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Tier;
    ///
    /// assert_eq!(Tier::from_input("  mEDium ").unwrap(), Tier::Medium);
    /// assert!(Tier::from_input("expert").is_err());
    /// ```
    pub fn from_input(input: &str) -> Result<Self, InvalidTierError> {
        Self::from_str(&capitalize(input.trim())).map_err(|_| InvalidTierError(input.to_string()))
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
