//! Startup menu
//!
//! Asks whether to play or to add a custom word when no subcommand was given.

use super::add::add_word;
use super::prompt::Prompter;
use super::simple::play_rounds;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;

/// Run the startup menu on stdin/stdout
///
/// # Errors
///
/// Returns an error if the chosen flow fails.
pub fn run_menu(storage: &Path) -> Result<()> {
    let mut prompter = Prompter::stdio();
    menu(&mut prompter, storage, &mut rand::rng())
}

/// `add` starts the add-word flow; any other answer starts playing
///
/// # Errors
///
/// Returns an error if the chosen flow fails.
pub fn menu<R, W, G>(prompter: &mut Prompter<R, W>, storage: &Path, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let choice = prompter
        .ask("Do you want to play Hangman or add a custom word? (play/add)")?
        .to_lowercase();

    if choice == "add" {
        add_word(prompter, storage, None, None)?;
    } else {
        play_rounds(prompter, storage, None, rng)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn add_choice_appends_word() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("custom_words.csv");

        let mut p = prompter("ADD\nhard\nzeppelin\n");
        menu(&mut p, &storage, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(fs::read_to_string(&storage).unwrap(), "Hard,zeppelin\n");
    }

    #[test]
    fn any_other_choice_plays() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("custom_words.csv");
        fs::write(&storage, "Hard,zeppelin\n").unwrap();

        // The player never finds the word, so the round needs every wrong
        // letter plus the hint answer before "Play again?".
        let mut p = prompter("whatever\nmedium\nq\nw\nx\nno\nz\nj\nv\nno\n");
        menu(&mut p, &storage, &mut StdRng::seed_from_u64(3)).unwrap();

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Welcome to Hangman!"));
        assert!(out.contains("Game over!"));
        assert!(out.contains("Rounds played: 1"));
        assert!(!fs::read_to_string(&storage).unwrap().contains("Medium"));
    }
}
