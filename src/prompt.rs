//! User input and interaction handling.
//! The Prompter trait is the seam between option resolution and the
//! terminal, so tests can substitute canned answers.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Select};

/// Interactive prompt abstraction.
pub trait Prompter {
    /// Single-choice selection; returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Yes/no confirmation.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
