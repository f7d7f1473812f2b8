use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// Console replaying canned answers and recording everything shown.
///
/// Once the answers run out, every further question reads as an interrupt.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn messages_containing(&self, needle: &str) -> usize {
        self.messages.iter().filter(|message| message.contains(needle)).count()
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().map(|answer| answer.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
