//! Line-based prompting
//!
//! `Prompter` wraps an input and an output stream so the text-mode flows can
//! run against stdin/stdout or against in-memory buffers.

use crate::core::Tier;
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;

/// Failure while talking to the operator
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input stream closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Prompt/answer channel to the operator
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// # Errors
    /// Returns `PromptError::Closed` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }

        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; only `yes` or `y` (any case) count as yes
    ///
    /// # Errors
    /// Returns `PromptError::Closed` at end of input.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }

    /// Ask for a tier until the answer names one
    ///
    /// # Errors
    /// Returns `PromptError::Closed` at end of input.
    pub fn ask_tier(&mut self, prompt: &str) -> Result<Tier, PromptError> {
        let mut answer = self.ask(prompt)?;
        loop {
            match Tier::from_input(&answer) {
                Ok(tier) => return Ok(tier),
                Err(e) => {
                    debug!("Rejected tier: {e}");
                    answer = self.ask("Invalid choice. Choose difficulty (Easy/Medium/Hard)")?;
                }
            }
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
