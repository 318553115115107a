//! Word bank loading and selection
//!
//! The bank always starts from the built-in tiers and then takes whatever the
//! storage file adds. Nothing is cached: every call to `choose_word` re-reads
//! storage, so words added between rounds show up in the next one.

use super::builtin_words;
use super::storage::{CustomWordEntry, StorageError, read_custom_words};
use crate::core::{SecretWord, Tier};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::path::Path;
use strum::IntoEnumIterator;
use thiserror::Error;

/// Candidate words grouped by tier
///
/// Every tier is present, even when storage contributes nothing to it.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: FxHashMap<Tier, Vec<SecretWord>>,
}

/// Failure to pick a word
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("no playable words for the {0} tier")]
    EmptyTier(Tier),
}

impl WordBank {
    /// Bank holding only the built-in tiers
    #[must_use]
    pub fn builtin() -> Self {
        let words = Tier::iter()
            .map(|tier| (tier, words_from_slice(builtin_words(tier))))
            .collect();
        Self { words }
    }

    /// Append custom entries to their tiers
    ///
    /// Entries whose word has no letters to guess are skipped. Returns the
    /// number of words added.
    pub fn merge<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = CustomWordEntry>,
    {
        let mut added = 0;
        for entry in entries {
            match SecretWord::new(&entry.word) {
                Ok(word) => {
                    self.words.entry(entry.tier).or_default().push(word);
                    added += 1;
                }
                Err(e) => debug!("Skipping custom {} word: {e}", entry.tier),
            }
        }
        added
    }

    /// Candidate words for a tier
    #[must_use]
    pub fn words(&self, tier: Tier) -> &[SecretWord] {
        self.words.get(&tier).map_or(&[], Vec::as_slice)
    }

    /// Total number of words across all tiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pick a word from `tier` uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> Option<&SecretWord> {
        self.words(tier).choose(rng)
    }
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::EASY;
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}

/// Build the bank from the built-in tiers plus the storage file at `path`
///
/// # Errors
///
/// Returns an error if the storage file exists but cannot be read.
pub fn load_word_bank<P: AsRef<Path>>(path: P) -> Result<WordBank, StorageError> {
    let path = path.as_ref();
    let mut bank = WordBank::builtin();
    let added = bank.merge(read_custom_words(path)?);
    debug!(
        "Word bank holds {} words ({added} custom from {})",
        bank.len(),
        path.display()
    );
    Ok(bank)
}

/// Choose a secret word for `tier` using the thread RNG
///
/// # Errors
///
/// Returns an error if storage cannot be read or the tier has no words.
pub fn choose_word<P: AsRef<Path>>(tier: Tier, path: P) -> Result<SecretWord, WordBankError> {
    choose_word_with(tier, path, &mut rand::rng())
}

/// Choose a secret word for `tier` using the given RNG
///
/// # Errors
///
/// Returns an error if storage cannot be read or the tier has no words.
pub fn choose_word_with<P, R>(tier: Tier, path: P, rng: &mut R) -> Result<SecretWord, WordBankError>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let bank = load_word_bank(path)?;
    bank.choose(tier, rng)
        .cloned()
        .ok_or(WordBankError::EmptyTier(tier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::storage::add_custom_word;
    use crate::wordlists::{EASY, HARD, MEDIUM};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn entry(tier: Tier, word: &str) -> CustomWordEntry {
        CustomWordEntry {
            tier,
            word: word.to_string(),
        }
    }

    #[test]
    fn words_from_slice_skips_unplayable() {
        let words = words_from_slice(&["tree", "", "42", "Lamp"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "tree");
        assert_eq!(words[1].text(), "lamp");
    }

    #[test]
    fn builtin_bank_has_every_tier() {
        let bank = WordBank::builtin();
        assert_eq!(bank.words(Tier::Easy).len(), EASY.len());
        assert_eq!(bank.words(Tier::Medium).len(), MEDIUM.len());
        assert_eq!(bank.words(Tier::Hard).len(), HARD.len());
        assert_eq!(bank.len(), EASY.len() + MEDIUM.len() + HARD.len());
        assert!(!bank.is_empty());
    }

    #[test]
    fn merge_appends_to_matching_tier() {
        let mut bank = WordBank::builtin();
        let added = bank.merge([
            entry(Tier::Hard, "Xylophone"),
            entry(Tier::Hard, "xylophone"),
            entry(Tier::Easy, "   "),
        ]);

        assert_eq!(added, 2);
        assert_eq!(bank.words(Tier::Hard).len(), HARD.len() + 2);
        assert_eq!(bank.words(Tier::Easy).len(), EASY.len());
        let copies = bank
            .words(Tier::Hard)
            .iter()
            .filter(|w| w.text() == "xylophone")
            .count();
        assert_eq!(copies, 2);
    }

    #[test]
    fn missing_storage_gives_builtin_bank() {
        let dir = tempfile::tempdir().unwrap();
        let bank = load_word_bank(dir.path().join("none.csv")).unwrap();
        assert_eq!(bank.len(), WordBank::builtin().len());
    }

    #[test]
    fn chosen_words_stay_in_their_tier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom_words.csv");
        fs::write(&path, "Easy,zebra\nHard,quartz\nExpert,nope\nMedium\n").unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_custom = false;
        for _ in 0..300 {
            let easy = choose_word_with(Tier::Easy, &path, &mut rng).unwrap();
            assert!(EASY.contains(&easy.text()) || easy.text() == "zebra");
            saw_custom |= easy.text() == "zebra";

            let medium = choose_word_with(Tier::Medium, &path, &mut rng).unwrap();
            assert!(MEDIUM.contains(&medium.text()), "{medium} is not Medium");

            let hard = choose_word_with(Tier::Hard, &path, &mut rng).unwrap();
            assert!(HARD.contains(&hard.text()) || hard.text() == "quartz");
            assert_ne!(hard.text(), "nope");
        }
        assert!(saw_custom, "custom Easy word was never chosen");
    }

    #[test]
    fn words_added_between_calls_are_visible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom_words.csv");

        let before = load_word_bank(&path).unwrap();
        add_custom_word(&path, Tier::Medium, "walrus").unwrap();
        let after = load_word_bank(&path).unwrap();

        assert_eq!(after.words(Tier::Medium).len(), before.words(Tier::Medium).len() + 1);
        assert!(after.words(Tier::Medium).iter().any(|w| w.text() == "walrus"));
    }

    #[test]
    fn choose_from_thread_rng() {
        let dir = tempfile::tempdir().unwrap();
        let word = choose_word(Tier::Hard, dir.path().join("none.csv")).unwrap();
        assert!(HARD.contains(&word.text()));
    }
}
