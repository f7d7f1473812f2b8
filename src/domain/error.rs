use std::io;

use thiserror::Error;

/// Library-wide error type for mkcomponent operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file is not valid TOML or does not match the expected shape.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// User-entered element path cannot produce a usable element.
    #[error("Invalid element path '{0}': expected names separated by '/', without '.' or '..'")]
    InvalidElementPath(String),

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// Reading an answer from the console failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
