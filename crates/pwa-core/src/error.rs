//! Error types for pwa-core

use std::path::PathBuf;

/// Result type for pwa-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pwa-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest configuration has no keys at all
    #[error("empty manifest spec")]
    EmptyManifest,

    /// The manifest configuration lacks a non-empty `icons` entry
    #[error("manifest is missing required \"icons\"")]
    MissingIcons,

    /// Configuration file could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Manifest spec could not be encoded as JSON
    #[error("Failed to encode manifest: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that abort reconciliation before any write is attempted.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::EmptyManifest | Self::MissingIcons | Self::Serialization(_)
        )
    }
}
