//! Error types for loading source inputs.

use std::io;

use thiserror::Error;

/// Failure to turn a path into a [`crate::Source`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read.
    #[error("could not open file {path}: {source}")]
    CouldNotOpen {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// The operating system error code, if one is available.
    pub fn os_code(&self) -> u32 {
        match self {
            SourceError::NotFound { .. } => 0,
            SourceError::CouldNotOpen { source, .. } => {
                source.raw_os_error().unwrap_or(0) as u32
            }
        }
    }
}
