//! Loading a project's scope brief from a local text file.

use crate::libs::error::{TrackerError, TrackerResult, Warning};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File read when the user does not name a scope file.
pub const DEFAULT_SCOPE_FILE: &str = "default_scope.txt";

/// Scope text together with any warning raised while loading it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scope {
    pub text: String,
    pub warning: Option<Warning>,
}

/// Reads the whole file at `path` as the project scope.
///
/// A missing file is not an error: the scope is empty and
/// [`Warning::ScopeNotFound`] is attached so the caller can tell the user
/// and carry on with project creation.
pub fn load(path: impl AsRef<Path>) -> TrackerResult<Scope> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "loaded project scope");
            Ok(Scope { text, warning: None })
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "scope file not found, using an empty scope");
            Ok(Scope {
                text: String::new(),
                warning: Some(Warning::ScopeNotFound(path.to_path_buf())),
            })
        }
        Err(source) => Err(TrackerError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
