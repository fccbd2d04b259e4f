//! Errors of the tag generator host.
//!
//! Scanning itself cannot fail; these only come from reading inputs and
//! writing tags.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The result type of the host.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type of the host.
#[derive(Error, Debug)]
pub enum Error {
    /// An input could not be read.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        /// The input.
        path: PathBuf,
        /// What went wrong.
        source: io::Error,
    },

    /// Walking a directory failed.
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// Writing tags failed.
    #[error("Cannot write tags: {0}")]
    Output(#[from] io::Error),

    /// Serializing a tag failed.
    #[error("Cannot serialize tag: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Error reading `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
