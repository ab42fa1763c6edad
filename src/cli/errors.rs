use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error(transparent)]
    Compile(#[from] crate::error::Error),
}

impl AppError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::NotADirectory { .. }
            | AppError::InvalidArgument { .. } => 2,
            AppError::Compile(_) => 1,
        }
    }
}
