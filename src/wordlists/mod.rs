//! Word sources for Hangman
//!
//! The built-in tiers are compiled into the binary; custom words come from a
//! two-column storage file and are merged in each time a word is chosen.

mod embedded;
pub mod loader;
pub mod storage;

use crate::core::Tier;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use loader::{WordBank, WordBankError, choose_word, choose_word_with, load_word_bank};
pub use storage::{CustomWordEntry, DEFAULT_STORAGE_FILE, StorageError, add_custom_word};

/// Built-in words for a tier
#[must_use]
pub const fn builtin_words(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Easy => EASY,
        Tier::Medium => MEDIUM,
        Tier::Hard => HARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn builtin_tiers_are_populated() {
        assert_eq!(EASY, &["tree", "fish", "book", "lamp", "chair"]);
        assert_eq!(MEDIUM, &["python", "guitar", "planet", "rocket"]);
        assert_eq!(HARD, &["elephant", "television", "framework", "kangaroo"]);
    }

    #[test]
    fn builtin_words_are_lowercase_letters() {
        for tier in Tier::iter() {
            for &word in builtin_words(tier) {
                assert!(
                    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' in {tier} is not lowercase ASCII"
                );
            }
        }
    }

    #[test]
    fn builtin_tiers_are_disjoint() {
        for &word in EASY {
            assert!(!MEDIUM.contains(&word) && !HARD.contains(&word));
        }
        for &word in MEDIUM {
            assert!(!HARD.contains(&word));
        }
    }
}
