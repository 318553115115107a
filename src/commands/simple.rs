//! Simple interactive CLI mode
//!
//! Prompt-driven rounds of Hangman without the TUI.

use super::prompt::{PromptError, Prompter};
use crate::core::Tier;
use crate::game::{GameSession, RoundSummary, Statistics};
use crate::output::{
    hint_revealed, round_result, round_status, statistics_report, turn_feedback, welcome_banner,
};
use crate::wordlists::choose_word_with;
use anyhow::Result;
use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure, closed input, or unreadable word storage.
pub fn run_simple(storage: &Path, difficulty: Option<Tier>) -> Result<()> {
    let mut prompter = Prompter::stdio();
    play_rounds(&mut prompter, storage, difficulty, &mut rand::rng())?;
    Ok(())
}

/// Play rounds until the operator declines another one
///
/// Each round asks for a tier unless `difficulty` fixes it, then draws a fresh
/// word from the bank, so words added to storage between rounds are eligible.
///
/// # Errors
///
/// Returns an error on I/O failure, closed input, or unreadable word storage.
pub fn play_rounds<R, W, G>(
    prompter: &mut Prompter<R, W>,
    storage: &Path,
    difficulty: Option<Tier>,
    rng: &mut G,
) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    prompter.say(welcome_banner())?;
    let mut stats = Statistics::default();

    loop {
        let tier = match difficulty {
            Some(tier) => tier,
            None => prompter.ask_tier("Choose difficulty (Easy/Medium/Hard)")?,
        };

        let secret = choose_word_with(tier, storage, rng)?;
        debug!("Starting a {tier} round");

        let summary = play_round(prompter, GameSession::new(tier, secret))?;
        stats.record(&summary);

        if !prompter.ask_yes_no("\nPlay again? (yes/no)")? {
            break;
        }
    }

    prompter.say(statistics_report(&stats))?;
    prompter.say("\nThanks for playing!")?;
    Ok(stats)
}

/// Drive one round to completion
///
/// # Errors
///
/// Returns an error on I/O failure or closed input.
pub fn play_round<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mut session: GameSession,
) -> Result<RoundSummary, PromptError> {
    while !session.state().is_over() {
        prompter.say(round_status(&session))?;

        if session.hint_available() {
            let accept = prompter.ask_yes_no("Would you like a hint? (yes/no)")?;
            if session.resolve_hint(accept).is_some() {
                prompter.say(hint_revealed(&session))?;
                if session.state().is_over() {
                    break;
                }
            }
        }

        let guess = prompter.ask("Enter a letter or guess the full word")?;
        let turn = session.guess(&guess);
        prompter.say(turn_feedback(turn.outcome))?;
    }

    prompter.say(round_result(&session))?;
    Ok(session.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::game::RoundState;
    use crate::wordlists::EASY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn prompter(input: &str) -> TestPrompter {
        colored::control::set_override(false);
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: TestPrompter) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    fn session(word: &str) -> GameSession {
        GameSession::new(Tier::Easy, SecretWord::new(word).unwrap())
    }

    #[test]
    fn round_won_letter_by_letter() {
        let mut p = prompter("z\nb\no\nk\n");
        let summary = play_round(&mut p, session("book")).unwrap();

        assert_eq!(summary.state, RoundState::Won);
        assert_eq!(summary.final_score, 120);
        assert_eq!(summary.misses, 1);

        let out = output(p);
        assert!(out.contains("Wrong guess!"));
        assert!(out.contains("Word: b o o _"));
        assert!(out.contains("Well done! The word was 'book'. Your final score: 120"));
        assert!(!out.contains("hint"));
    }

    #[test]
    fn round_lost_with_declined_hint() {
        let mut p = prompter("a\nb\nc\nno\nd\ne\ng\n");
        let summary = play_round(&mut p, session("fish")).unwrap();

        assert_eq!(summary.state, RoundState::Lost);
        assert_eq!(summary.final_score, 0);
        assert!(!summary.hint_used);

        let out = output(p);
        assert_eq!(out.matches("Would you like a hint?").count(), 1);
        assert!(out.contains("Game over! The word was 'fish'. Your final score: 0"));
    }

    #[test]
    fn accepted_hint_reveals_a_letter() {
        let mut p = prompter("x\ny\nz\nyes\no\nk\n");
        let summary = play_round(&mut p, session("book")).unwrap();

        assert!(summary.hint_used);
        assert_eq!(summary.state, RoundState::Won);
        assert_eq!(summary.final_score, 90);
        assert!(output(p).contains("Hint used! A letter has been revealed: b _ _ _"));
    }

    #[test]
    fn hint_completing_the_word_ends_round() {
        let mut p = prompter("b\no\nx\ny\nz\nyes\n");
        let summary = play_round(&mut p, session("book")).unwrap();

        assert_eq!(summary.state, RoundState::Won);
        assert_eq!(summary.final_score, 90);
    }

    #[test]
    fn invalid_guesses_are_reprompted() {
        let mut p = prompter("12\n\nbo\nbook\n");
        let summary = play_round(&mut p, session("book")).unwrap();

        assert_eq!(summary.final_score, 100);
        assert_eq!(output(p).matches("Invalid input").count(), 3);
    }

    #[test]
    fn closed_input_stops_round() {
        let mut p = prompter("b\n");
        assert!(matches!(
            play_round(&mut p, session("book")),
            Err(PromptError::Closed)
        ));
    }

    #[test]
    fn rounds_repeat_until_declined() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("custom_words.csv");

        // Every Easy word typed in full wins whichever one was drawn; the
        // first line read after the win answers "Play again?".
        let mut input = String::from("expert\neasy\n");
        for word in EASY {
            input.push_str(word);
            input.push('\n');
        }
        input.push_str("no\n");

        let mut p = prompter(&input);
        let mut rng = StdRng::seed_from_u64(42);
        let stats = play_rounds(&mut p, &storage, None, &mut rng).unwrap();

        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.best_score, Some(100));

        let out = output(p);
        assert!(out.contains("Welcome to Hangman!"));
        assert!(out.contains("Invalid choice"));
        assert!(out.contains("Thanks for playing!"));
    }
}
