//! Error types for the preparer CLI.
//!
//! Incomplete configuration is not an error: it is reported through
//! `ValidationReport` reasons. Only the cases below abort a command.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for preparer operations.
#[derive(Error, Debug)]
pub enum PreparerError {
    /// An operation was called out of order (e.g. readiness read before validation).
    #[error("{0}")]
    Usage(String),

    /// The settings file is not a valid settings document.
    #[error("malformed settings: {0}")]
    MalformedInput(String),

    /// The settings file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// Submission was required but the configuration is not ready.
    #[error("not ready to submit ({0} reason(s))")]
    NotReady(usize),
}

impl PreparerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PreparerError::Usage(_) => exit_codes::USER_ERROR,
            PreparerError::MalformedInput(_) => exit_codes::USER_ERROR,
            PreparerError::Io(_) => exit_codes::IO_FAILURE,
            PreparerError::NotReady(_) => exit_codes::NOT_READY,
        }
    }
}

/// Result type alias for preparer operations.
pub type Result<T> = std::result::Result<T, PreparerError>;
