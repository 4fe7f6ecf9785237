//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use console::style;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    catalog_summary_lines, display_boundary_warning, display_catalog_summary, display_dry_run,
    display_error, display_proposed_tag, display_status, display_success,
};

/// Source of yes/no answers for the workflow's confirmation steps
pub trait Prompt {
    /// Ask a yes/no question; an empty answer selects `default`
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;
}

/// Interprets a raw answer. Empty input selects the default; anything
/// unrecognised yields `None` so the question is asked again.
fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompts on the terminal and reads answers from stdin.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            print!("\n{} {}: ", question, style(hint).dim());
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().lock().read_line(&mut input)? == 0 {
                bail!("No answer received for: {}", question);
            }

            match parse_answer(&input, default) {
                Some(answer) => return Ok(answer),
                None => formatter::display_error("invalid input"),
            }
        }
    }
}

/// Replays canned answers; an exhausted script falls back to each default.
/// An unrecognised answer asks the same question again with the next one.
///
/// Every question asked is recorded, which lets tests check the exact
/// conversation.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        loop {
            self.asked.borrow_mut().push(question.to_string());
            let answer = self.answers.borrow_mut().pop_front().unwrap_or_default();
            if let Some(answer) = parse_answer(&answer, default) {
                return Ok(answer);
            }
        }
    }
}
