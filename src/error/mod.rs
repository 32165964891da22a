//! Error handling for dataset assembly.
//!
//! Only structural problems surface as errors: unreadable files, malformed JSON,
//! output that cannot be written, and configurations that make no sense. Missing
//! patient attributes or trial bounds are resolved by the evaluator and never
//! reach this module.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for dataset assembly
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Error opening, reading or writing a file
    #[error("IO error for {}: {context}: {source}", path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Input file is not valid JSON of the expected shape
    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The pipeline configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DatasetError {
    /// Create an IO error carrying the offending path and a short description
    pub fn io(path: impl AsRef<Path>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            context: context.into(),
            source,
        }
    }

    /// Create a JSON error for an input file
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
