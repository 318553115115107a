//! Word bank listing

use crate::core::Tier;
use crate::output::word_bank_listing;
use crate::wordlists::load_word_bank;
use anyhow::Result;
use std::path::Path;

/// Print the built-in and custom words, optionally for a single tier
///
/// # Errors
///
/// Returns an error if the storage file exists but cannot be read.
pub fn list_words(storage: &Path, tier: Option<Tier>) -> Result<()> {
    let bank = load_word_bank(storage)?;
    print!("{}", word_bank_listing(&bank, tier));
    println!("Custom words are read from {}", storage.display());
    Ok(())
}
