//! Error reporting for the command-line tools.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::RowlifeError;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Message printed by a binary before exiting with status 1.
#[derive(Error, Debug)]
#[error("{msg}")]
pub struct CliError {
    pub msg: String,
    #[source]
    pub source: Option<BoxedSource>,
}

impl CliError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            source: None,
        }
    }

    /// Failure to read or create `path`, with a suggestion for the user.
    pub fn io(operation: &str, path: &Path, err: io::Error) -> Self {
        Self {
            msg: format_io_error(operation, path, &err),
            source: Some(Box::new(err)),
        }
    }

    /// Library error with `context` and a hint for the variant.
    pub fn rowlife(context: &str, err: RowlifeError) -> Self {
        Self {
            msg: format!("{context}: {}", cli_hint(&err)),
            source: Some(Box::new(err)),
        }
    }
}

pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    let suggestion = match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check the file permissions.",
        io::ErrorKind::InvalidData => "Pattern files must be UTF-8 text, one line per pattern.",
        _ => "Check the path and try again.",
    };
    format!("Error {operation} '{}': {err}. {suggestion}", path.display())
}

/// Hint shown for a library error.
pub fn cli_hint(err: &RowlifeError) -> String {
    match err {
        RowlifeError::InvalidCharacter { ch, column } => format!(
            "unexpected {ch:?} at column {column}. Lines may only use the filled and blank symbols."
        ),
        RowlifeError::Config(msg) => format!("{msg}. Invalid configuration."),
        RowlifeError::Io(io) => io.to_string(),
    }
}
