//! # Content Error Types
//!
//! Error types for content loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ContentError (this module) ← Adds the file path                       │
//! │       │                                                                 │
//! │       ├──► Optional content: logged, replaced by a default             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← Page cannot be composed                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Content loading errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The file could not be read.
    ///
    /// ## When This Occurs
    /// - File doesn't exist (content not published yet)
    /// - Permissions issue
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for the expected shape,
    /// even after text cleanup.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl ContentError {
    /// Creates a Read error for a path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a Parse error for a path.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ContentError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ContentError::Read { path, .. } | ContentError::Parse { path, .. } => path,
        }
    }
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
