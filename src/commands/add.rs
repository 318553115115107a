//! Add-word flow
//!
//! Appends one custom word to storage, prompting for whatever was not given
//! on the command line.

use super::prompt::Prompter;
use crate::core::Tier;
use crate::wordlists::{CustomWordEntry, add_custom_word};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// Run the add-word flow on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure, closed input, or unwritable storage.
pub fn run_add(storage: &Path, difficulty: Option<Tier>, word: Option<String>) -> Result<()> {
    let mut prompter = Prompter::stdio();
    add_word(&mut prompter, storage, difficulty, word)?;
    Ok(())
}

/// Collect a tier and a word, then append them to storage
///
/// The tier is re-prompted until valid and the word until non-empty. The word
/// is stored lower-cased; duplicates are allowed.
///
/// # Errors
///
/// Returns an error on I/O failure, closed input, or unwritable storage.
pub fn add_word<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    storage: &Path,
    difficulty: Option<Tier>,
    word: Option<String>,
) -> Result<CustomWordEntry> {
    let tier = match difficulty {
        Some(tier) => tier,
        None => prompter.ask_tier("Enter difficulty for the new word (Easy/Medium/Hard)")?,
    };

    let word = match word.map(|w| w.trim().to_string()).filter(|w| !w.is_empty()) {
        Some(word) => word,
        None => loop {
            let word = prompter.ask("Enter a new word")?;
            if !word.is_empty() {
                break word;
            }
            prompter.say("The word cannot be empty.")?;
        },
    };

    let entry = add_custom_word(storage, tier, &word)?;
    prompter.say(format!(
        "Word '{}' added to {} difficulty!",
        entry.word, entry.tier
    ))?;

    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompts_for_tier_and_word() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("custom_words.csv");

        let mut p = prompter("legendary\nmedium\n\nWalrus\n");
        let entry = add_word(&mut p, &storage, None, None).unwrap();

        assert_eq!(entry.tier, Tier::Medium);
        assert_eq!(entry.word, "walrus");
        assert_eq!(fs::read_to_string(&storage).unwrap(), "Medium,walrus\n");

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Invalid choice"));
        assert!(out.contains("The word cannot be empty."));
        assert!(out.contains("Word 'walrus' added to Medium difficulty!"));
    }

    #[test]
    fn command_line_values_skip_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("custom_words.csv");

        let mut p = prompter("");
        let entry = add_word(&mut p, &storage, Some(Tier::Hard), Some(" Quartz ".into())).unwrap();

        assert_eq!(entry.word, "quartz");
        assert_eq!(fs::read_to_string(&storage).unwrap(), "Hard,quartz\n");
    }

    #[test]
    fn blank_command_line_word_is_prompted() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("custom_words.csv");

        let mut p = prompter("otter\n");
        let entry = add_word(&mut p, &storage, Some(Tier::Easy), Some("  ".into())).unwrap();
        assert_eq!(entry.word, "otter");
    }
}
