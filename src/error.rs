//! Error types for bookstrat operations.

use thiserror::Error;

/// Errors that can occur while running a command list.
#[derive(Error, Debug)]
pub enum Error {
    /// The command name is unknown, or the variant is not valid for it.
    #[error("Unknown command or strategy: {command} with method type: {variant}")]
    InvalidCommand { command: String, variant: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_command(command: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::InvalidCommand {
            command: command.into(),
            variant: variant.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
