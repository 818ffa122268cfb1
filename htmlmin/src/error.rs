//! Error handling for file based rendering
//!
//! Rendering a string never fails. Reading a template from disk can, and
//! those failures are reported with the path that was being read.

use std::{error::Error, fmt::Display, path::Path};

/// Error type for template loading failures
#[derive(Debug)]
pub struct MinifyError {
    pub(crate) message: String,
}

impl MinifyError {
    /// Creates an error for a template that could not be read
    pub(crate) fn read(path: &Path, err: std::io::Error) -> Self {
        Self {
            message: format!("failed to read {}: {}", path.display(), err),
        }
    }
}

impl Display for MinifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<std::io::Error> for MinifyError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl Error for MinifyError {}

/// Result type for template loading operations
pub type Result<T> = std::result::Result<T, MinifyError>;
