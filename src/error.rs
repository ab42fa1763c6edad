//! Crate-level error type and `Result` alias.
//! Each variant names the file involved, so the first failure of a run can be
//! reported without further context.
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: source is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directory {}: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("batch finished with {errors} failed file(s)")]
    BatchFailed { errors: usize },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Encoding,
    /// The parser rejected the source or could not be run
    Parse,
    Serialize,
    Write,
    ListDirectory,
    Config,
    BatchFailed,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Read { .. } => ErrorKind::Read,
            Error::Encoding { .. } => ErrorKind::Encoding,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Serialize { .. } => ErrorKind::Serialize,
            Error::Write { .. } => ErrorKind::Write,
            Error::ListDirectory { .. } => ErrorKind::ListDirectory,
            Error::Config { .. } => ErrorKind::Config,
            Error::BatchFailed { .. } => ErrorKind::BatchFailed,
        }
    }

    /// The file the failure is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Read { path, .. }
            | Error::Encoding { path }
            | Error::Parse { path, .. }
            | Error::Serialize { path, .. }
            | Error::Write { path, .. }
            | Error::ListDirectory { path, .. }
            | Error::Config { path, .. } => Some(path.as_path()),
            Error::BatchFailed { .. } => None,
        }
    }
}
