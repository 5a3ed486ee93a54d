// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanMergeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed project record: {source} (path: {path})")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScanMergeError>;

impl ScanMergeError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

impl From<toml::de::Error> for ScanMergeError {
    fn from(e: toml::de::Error) -> Self {
        ScanMergeError::Config(e.to_string())
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for ScanMergeError {
    fn from(e: walkdir::Error) -> Self {
        ScanMergeError::Other(e.to_string())
    }
}
