//! Interactive prompting.
//!
//! The [`Prompter`] trait abstracts terminal questioning so that handlers can
//! be exercised in tests without a TTY. [`TermPrompter`] is the production
//! implementation backed by `dialoguer`; [`ScriptedPrompter`] replays canned
//! answers and records every prompt it was shown.

use crate::error::{Result, ShoutoutError};
use dialoguer::{Confirm, Input};
use std::collections::VecDeque;

pub trait Prompter {
    /// Ask for a line of text. May return an empty or whitespace-only answer.
    fn prompt_text(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn prompt_confirm(&mut self, message: &str) -> Result<bool>;
}

/// Ask until the answer is non-empty after trimming, then return it trimmed.
pub fn prompt_required<P: Prompter + ?Sized>(prompter: &mut P, message: &str) -> Result<String> {
    loop {
        let input = prompter.prompt_text(message)?;
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

/// Terminal-backed prompter for interactive use.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl TermPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TermPrompter {
    fn prompt_text(&mut self, message: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }

    fn prompt_confirm(&mut self, message: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(message).interact()?)
    }
}

/// Prompter that replays scripted answers, for tests and non-interactive use.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text: VecDeque<String>,
    confirms: VecDeque<bool>,
    /// Every prompt message shown, in order.
    pub seen: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text<I, T>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.text.extend(answers.into_iter().map(Into::into));
        self
    }

    pub fn with_confirms<I: IntoIterator<Item = bool>>(mut self, answers: I) -> Self {
        self.confirms.extend(answers);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_text(&mut self, message: &str) -> Result<String> {
        self.seen.push(message.to_string());
        self.text.pop_front().ok_or_else(|| {
            ShoutoutError::Prompt(format!("no scripted answer left for \"{}\"", message))
        })
    }

    fn prompt_confirm(&mut self, message: &str) -> Result<bool> {
        self.seen.push(message.to_string());
        self.confirms.pop_front().ok_or_else(|| {
            ShoutoutError::Prompt(format!("no scripted answer left for \"{}\"", message))
        })
    }
}
