use crate::domain::AppError;

/// Port for line-oriented prompt I/O.
pub trait Console {
    /// Ask a question and return the answer with surrounding whitespace trimmed.
    ///
    /// Returns `Ok(None)` when the user interrupts or input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Show a line of text to the user.
    fn say(&mut self, message: &str) -> Result<(), AppError>;
}
