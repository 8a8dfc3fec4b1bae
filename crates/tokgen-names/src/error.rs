//! Errors raised while loading the token list.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The list could not be opened or read.
    #[error("cannot read token list '{}'", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("token list is empty")]
    Empty,

    #[error("line {line}: blank token name")]
    BlankName { line: usize },

    #[error("line {line}: duplicate token name '{name}' (first declared on line {first_line})")]
    Duplicate {
        name: String,
        first_line: usize,
        line: usize,
    },
}

impl LoadError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Unavailable {
            path: path.into(),
            source,
        }
    }
}
