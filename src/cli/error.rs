// src/cli/error.rs
use inquire::InquireError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid minimum length: {0:?}")]
    InvalidLength(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] InquireError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// The user backed out of a prompt (Esc or Ctrl+C).
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            CliError::Prompt(InquireError::OperationCanceled | InquireError::OperationInterrupted)
        )
    }
}
