//! Error types for the record store.
//!
//! `Display` output is the exact diagnostic line shown to the user, so the
//! interpreter can print any recoverable error as-is.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // ========== Statement Errors ==========
    #[error("Syntax error. Could not parse statement.")]
    Syntax,

    #[error("String is too long.")]
    StringTooLong,

    #[error("ID must be positive.")]
    NegativeId,

    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedKeyword(String),

    #[error("Unrecognized command '{0}'.")]
    UnrecognizedCommand(String),

    // ========== Execution Errors ==========
    #[error("Error: Table full.")]
    TableFull,

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the interpreter can report this error and keep reading.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::TableFull.to_string(), "Error: Table full.");
        assert_eq!(
            Error::UnrecognizedKeyword("update 1".to_string()).to_string(),
            "Unrecognized keyword at start of 'update 1'."
        );
        assert_eq!(
            Error::UnrecognizedCommand(".tables".to_string()).to_string(),
            "Unrecognized command '.tables'."
        );
    }

    #[test]
    fn test_only_io_is_fatal() {
        assert!(Error::TableFull.is_recoverable());
        assert!(Error::Syntax.is_recoverable());
        let io = Error::from(std::io::Error::other("closed"));
        assert!(!io.is_recoverable());
    }
}
