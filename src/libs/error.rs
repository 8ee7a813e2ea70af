//! Error taxonomy for the persistence layer.
//!
//! Repository operations return [`TrackerError`] values instead of reporting
//! problems themselves. The command layer turns each variant into a
//! user-facing message and abandons only the current action.
//!
//! Non-fatal conditions (a missing scope file, a lookup that finds nothing)
//! are not errors: they surface as [`Warning`] values or `Option::None`.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by every repository operation.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Failures that abort the operation that produced them.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The store could not be opened or prepared for use.
    #[error("failed to connect to the database: {0}")]
    Connection(#[source] rusqlite::Error),

    /// A required field is missing or the value is not acceptable.
    #[error("{0}")]
    Validation(String),

    /// A timestamp did not match `YYYY-MM-DD HH:mm:ss`.
    #[error("invalid date '{input}', expected format YYYY-MM-DD HH:mm:ss")]
    Format { input: String },

    /// The store rejected a write (constraint violation, broken foreign key).
    #[error("the database rejected the write: {0}")]
    Persistence(#[source] rusqlite::Error),

    /// A read failed. Kept apart from an empty result on purpose.
    #[error("database query failed: {0}")]
    Query(#[source] rusqlite::Error),

    /// A local resource exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrackerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn format(input: impl Into<String>) -> Self {
        Self::Format { input: input.into() }
    }
}

/// Conditions the caller should report but that never abort an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The scope file was missing, an empty scope was used instead.
    ScopeNotFound(PathBuf),
}
