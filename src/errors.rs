//! Shared error types for swift2activity operations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for swift2activity operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Swift parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// The input contains no function declaration to diagram
    #[error("No function declaration found")]
    MissingFunction,

    /// No function declaration matches the requested name
    #[error("No function declaration named '{0}' found")]
    MissingNamedFunction(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    pub fn missing_function(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::MissingNamedFunction(name.to_string()),
            None => Self::MissingFunction,
        }
    }
}
