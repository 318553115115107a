//! Command implementations

pub mod add;
pub mod menu;
pub mod prompt;
pub mod simple;
pub mod words;

pub use add::{add_word, run_add};
pub use menu::{menu, run_menu};
pub use prompt::{PromptError, Prompter};
pub use simple::{play_round, play_rounds, run_simple};
pub use words::list_words;
