//! Formatting utilities for terminal output

use crate::core::SecretWord;
use rustc_hash::FxHashSet;

/// Show revealed letters and hide the rest as `_`, space separated
///
/// Characters that are not letters are always shown.
#[must_use]
pub fn mask_word(secret: &SecretWord, guessed: &FxHashSet<char>) -> String {
    secret
        .text()
        .chars()
        .map(|c| {
            if !c.is_alphabetic() || guessed.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters in alphabetical order, space separated
#[must_use]
pub fn sorted_letters<'a, I>(letters: I) -> String
where
    I: IntoIterator<Item = &'a char>,
{
    let mut letters: Vec<char> = letters.into_iter().copied().collect();
    letters.sort_unstable();
    letters.dedup();
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) as usize * width) / max as usize
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> FxHashSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn mask_hides_unguessed_letters() {
        let word = SecretWord::new("book").unwrap();
        assert_eq!(mask_word(&word, &set("")), "_ _ _ _");
        assert_eq!(mask_word(&word, &set("o")), "_ o o _");
        assert_eq!(mask_word(&word, &set("bok")), "b o o k");
    }

    #[test]
    fn mask_shows_non_letters() {
        let word = SecretWord::new("ice-cream").unwrap();
        assert_eq!(mask_word(&word, &set("c")), "_ c _ - c _ _ _ _");
    }

    #[test]
    fn sorted_letters_orders_and_dedups() {
        assert_eq!(sorted_letters(&['z', 'a', 'z', 'm']), "a m z");
        assert_eq!(sorted_letters(&set("")), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 6, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6, 6, 6), "██████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(create_progress_bar(3, 6, 12), "██████░░░░░░");
    }

    #[test]
    fn progress_bar_clamps_value() {
        assert_eq!(create_progress_bar(9, 6, 4), "████");
        assert_eq!(create_progress_bar(1, 0, 3), "░░░");
    }
}
