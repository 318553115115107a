//! Secret word representation
//!
//! A `SecretWord` stores the lower-cased word along with the set of distinct
//! letters a player has to reveal.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// The word to be guessed in a round
///
/// Only alphabetic characters count as letters. Anything else in a custom word
/// (a space, a hyphen) is shown as-is and never has to be guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for unplayable words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word '{0}' has no letters to guess")]
    NoLetters(String),
}

impl SecretWord {
    /// Create a new secret word
    ///
    /// The text is trimmed and lower-cased.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains no alphabetic letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Book").unwrap();
    /// assert_eq!(word.text(), "book");
    /// assert_eq!(word.letter_count(), 3);
    ///
    /// assert!(SecretWord::new("   ").is_err());
    /// assert!(SecretWord::new("42").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters: FxHashSet<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.is_empty() {
            return Err(WordError::NoLetters(text));
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// Number of distinct letters to reveal
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// First letter, reading left to right, that is not in `guessed`
    #[must_use]
    pub fn first_unrevealed(&self, guessed: &FxHashSet<char>) -> Option<char> {
        self.text
            .chars()
            .find(|c| c.is_alphabetic() && !guessed.contains(c))
    }

    /// Check whether `guessed` covers every distinct letter
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &FxHashSet<char>) -> bool {
        self.letters.is_subset(guessed)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> FxHashSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn word_creation_normalized() {
        let word = SecretWord::new("  KanGaroo ").unwrap();
        assert_eq!(word.text(), "kangaroo");
        assert_eq!(word.letters(), &set("kangro"));
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new(" \t"), Err(WordError::Empty));
        assert_eq!(
            SecretWord::new("1-2"),
            Err(WordError::NoLetters("1-2".to_string()))
        );
    }

    #[test]
    fn non_letters_are_not_required() {
        let word = SecretWord::new("ice cream").unwrap();
        assert!(!word.has_letter(' '));
        assert!(word.is_revealed_by(&set("icream")));
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("lamp").unwrap();
        assert!(word.has_letter('l'));
        assert!(word.has_letter('p'));
        assert!(!word.has_letter('z'));
        assert!(!word.has_letter('L'));
    }

    #[test]
    fn first_unrevealed_reads_left_to_right() {
        let word = SecretWord::new("guitar").unwrap();
        assert_eq!(word.first_unrevealed(&set("")), Some('g'));
        assert_eq!(word.first_unrevealed(&set("gu")), Some('i'));
        assert_eq!(word.first_unrevealed(&set("guiat")), Some('r'));
        assert_eq!(word.first_unrevealed(&set("guitar")), None);
    }

    #[test]
    fn revealed_only_when_all_letters_guessed() {
        let word = SecretWord::new("book").unwrap();
        assert!(!word.is_revealed_by(&set("bo")));
        assert!(word.is_revealed_by(&set("bok")));
        assert!(word.is_revealed_by(&set("kob")));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("Rocket").unwrap();
        assert_eq!(format!("{word}"), "rocket");
    }
}
