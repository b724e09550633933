//! Errors recovered at the menu loop boundary.

use kin_core::KinematicsError;
use thiserror::Error;

/// Everything that can abandon a single menu command.
///
/// All variants except [`SessionError::Io`] are reported to the user and the
/// loop continues in the same menu with the history untouched. I/O failures
/// end the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A formula precondition was violated.
    #[error(transparent)]
    InvalidInput(#[from] KinematicsError),

    /// Non-numeric or non-finite text where a number was expected.
    #[error("'{raw}' is not a valid number")]
    MalformedNumber { raw: String },

    /// The user interrupted the prompt.
    #[error("operation cancelled")]
    Cancelled,

    /// Standard input reached end of file.
    #[error("input closed")]
    Closed,

    /// Reading stdin or writing stdout failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
