//! Terminal output formatting
//!
//! Text blocks for the line-based mode and shared formatting helpers.

pub mod display;
pub mod formatters;

pub use display::{
    hint_revealed, round_result, round_status, statistics_report, turn_feedback, welcome_banner,
    word_bank_listing,
};
pub use formatters::{create_progress_bar, mask_word, sorted_letters};
