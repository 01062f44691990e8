//! User-facing dialogs: blocking alerts and yes/no confirmations.

use crate::errors::AppResult;
use crate::ui::messages::{alert_box, info, warning};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Dialogs {
    /// Error style alert (validation failure, missing position).
    fn alert(&mut self, title: &str, text: &str);

    /// Plain informational message.
    fn notify(&mut self, text: &str);

    /// Destructive-action confirmation. `Ok(true)` means go ahead.
    fn confirm(&mut self, title: &str, text: &str) -> AppResult<bool>;
}

/// Dialogs on the terminal; confirmations read a y/N answer from stdin.
pub struct TerminalDialogs {
    assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialogs for TerminalDialogs {
    fn alert(&mut self, title: &str, text: &str) {
        alert_box(title, text, true);
    }

    fn notify(&mut self, text: &str) {
        info(text);
    }

    fn confirm(&mut self, title: &str, text: &str) -> AppResult<bool> {
        warning(title);
        println!("   {}", text);

        if self.assume_yes {
            return Ok(true);
        }

        print!("Confirm [y/N]: ");
        io::stdout().flush()?;

        let mut s = String::new();
        io::stdin().lock().read_line(&mut s)?;
        Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Records every dialog and answers confirmations from a script.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub answers: VecDeque<bool>,
    pub alerts: Vec<(String, String)>,
    pub notices: Vec<String>,
    pub confirms: Vec<String>,
}

impl ScriptedDialogs {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&mut self, title: &str, text: &str) {
        self.alerts.push((title.to_string(), text.to_string()));
    }

    fn notify(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }

    fn confirm(&mut self, title: &str, _text: &str) -> AppResult<bool> {
        self.confirms.push(title.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
