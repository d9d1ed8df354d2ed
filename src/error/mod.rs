//! Error types for the command-line driver
//!
//! Path resolution itself cannot fail; these errors cover reading
//! configuration, gathering inputs and emitting the report.

use std::path::{Path, PathBuf};

/// Errors raised around path resolution
#[derive(Debug, thiserror::Error)]
pub enum OutpathError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Input discovery failed: {message}")]
    Discovery {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Report serialization failed: {message}")]
    Serialization { message: String },

    #[error("No input paths provided")]
    NoInputs,
}

impl OutpathError {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn config(message: String, path: Option<PathBuf>) -> Self {
        Self::Config { message, path }
    }

    pub fn discovery(message: String, path: Option<PathBuf>) -> Self {
        Self::Discovery { message, path }
    }

    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                message,
                path: Some(path),
            } => format!("Cannot access '{}': {}", path.display(), message),
            Self::Config {
                message,
                path: Some(path),
            } => format!("Invalid config file '{}': {}", path.display(), message),
            Self::Discovery {
                message,
                path: Some(path),
            } => format!("Cannot list inputs under '{}': {}", path.display(), message),
            Self::NoInputs => {
                "No input paths given. Pass paths as arguments or use --stdin".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<walkdir::Error> for OutpathError {
    fn from(error: walkdir::Error) -> Self {
        let path = error.path().map(Path::to_path_buf);
        Self::discovery(error.to_string(), path)
    }
}

/// Result type for driver operations
pub type OutpathResult<T> = Result<T, OutpathError>;
