//! Hangman - CLI
//!
//! Guess the secret word one letter at a time, in a full-screen TUI or in a
//! plain prompt-driven mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PromptError, list_words, run_add, run_menu, run_simple},
    core::Tier,
    interactive::{App, run_tui},
    wordlists::DEFAULT_STORAGE_FILE,
};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal Hangman with difficulty tiers, scoring, hints and custom words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom word storage: one `Tier,word` record per line
    #[arg(short = 'f', long, global = true, default_value = DEFAULT_STORAGE_FILE)]
    words_file: PathBuf,

    /// Enable debug logging (otherwise RUST_LOG applies, default: warn)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode
    Play {
        /// Difficulty for every round: easy, medium or hard
        #[arg(short, long, value_parser = Tier::from_input)]
        difficulty: Option<Tier>,
    },

    /// Simple CLI mode (prompt-driven rounds without TUI)
    Simple {
        /// Difficulty for every round: easy, medium or hard
        #[arg(short, long, value_parser = Tier::from_input)]
        difficulty: Option<Tier>,
    },

    /// Add a custom word to the word storage
    Add {
        /// Difficulty of the new word (prompted if omitted)
        #[arg(short, long, value_parser = Tier::from_input)]
        difficulty: Option<Tier>,

        /// The word to add (prompted if omitted)
        word: Option<String>,
    },

    /// List the built-in and custom words
    Words {
        /// Only list this difficulty
        #[arg(short, long, value_parser = Tier::from_input)]
        difficulty: Option<Tier>,
    },
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let storage = cli.words_file;

    // Without a subcommand, ask whether to play or add a word
    let result = match cli.command {
        None => run_menu(&storage),
        Some(Commands::Play { difficulty }) => run_tui(App::new(storage, difficulty)),
        Some(Commands::Simple { difficulty }) => run_simple(&storage, difficulty),
        Some(Commands::Add { difficulty, word }) => run_add(&storage, difficulty, word),
        Some(Commands::Words { difficulty }) => list_words(&storage, difficulty),
    };

    match result {
        Err(err) if matches!(err.downcast_ref::<PromptError>(), Some(PromptError::Closed)) => {
            println!("\nGoodbye!");
            Ok(())
        }
        other => other,
    }
}
