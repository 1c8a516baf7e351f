use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowlifeError {
    /// A character other than the filled/blank symbols was found in a line.
    #[error("invalid character {ch:?} at column {column}")]
    InvalidCharacter { ch: char, column: usize },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
