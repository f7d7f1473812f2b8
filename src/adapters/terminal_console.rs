use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Console;

/// Console backed by dialoguer for interactive terminals.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        println!("{}", message);
        Ok(())
    }
}
