//! User input for arguments that were left off the command line
//!
//! Commands never talk to the terminal directly; they ask an [`InputProvider`].
//! The binary uses [`TerminalInput`], tests script answers with [`ScriptedInput`].

use crate::errors::{KekiError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of interactive answers
pub trait InputProvider {
    /// Ask for a line of text. `None` means the user gave nothing back
    /// (empty line or end of input), which callers treat as cancellation.
    fn text(&self, prompt: &str) -> Result<Option<String>>;

    /// Ask a yes/no question, defaulting to no
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

fn non_empty(answer: String) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Prompts on the real terminal.
///
/// Uses dialoguer when stdin is a TTY and falls back to plain line reads when
/// input is piped, so scripts can still answer prompts.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    fn interactive() -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }

    fn read_line(prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl InputProvider for TerminalInput {
    fn text(&self, prompt: &str) -> Result<Option<String>> {
        if !Self::interactive() {
            return Ok(Self::read_line(&format!("{prompt}: "))?.and_then(non_empty));
        }

        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| KekiError::prompt(e.to_string()))?;
        Ok(non_empty(answer))
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        if !Self::interactive() {
            let answer = Self::read_line(&format!("{prompt} (y/n): "))?;
            return Ok(answer.as_deref().is_some_and(is_yes));
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| KekiError::prompt(e.to_string()))
    }
}

/// Canned answers, consumed in order. Running out of answers counts as an
/// empty reply.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Prompts shown so far
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, prompt: &str) -> String {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or_default()
    }
}

impl InputProvider for ScriptedInput {
    fn text(&self, prompt: &str) -> Result<Option<String>> {
        Ok(non_empty(self.next(prompt)))
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(is_yes(&self.next(prompt)))
    }
}
