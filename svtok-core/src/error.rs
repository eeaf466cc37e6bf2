//! Error types for table loading
//!
//! Segmentation itself never fails; errors only arise when an abbreviation
//! table is read and validated.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an abbreviation table
#[derive(Error, Debug)]
pub enum CoreError {
    /// The table file could not be read
    #[error("failed to read abbreviation table {path}: {source}")]
    Io {
        /// Path of the table file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The table is not valid TOML or does not match the schema
    #[error("invalid abbreviation table: {0}")]
    Toml(#[from] toml::de::Error),

    /// The metadata section is incomplete
    #[error("invalid metadata: {0}")]
    Metadata(String),

    /// An entry has no tokens
    #[error("entry {index} has no tokens")]
    EmptyKey {
        /// Zero-based position of the entry
        index: usize,
    },

    /// An entry contains an empty token string
    #[error("entry {index} contains an empty token")]
    EmptyToken {
        /// Zero-based position of the entry
        index: usize,
    },

    /// An entry has an empty canonical form
    #[error("entry {index} has an empty canonical form")]
    EmptyCanonical {
        /// Zero-based position of the entry
        index: usize,
    },

    /// The same token sequence was declared twice
    #[error("entry {index} duplicates abbreviation {tokens:?}")]
    DuplicateEntry {
        /// Zero-based position of the second declaration
        index: usize,
        /// The repeated token sequence
        tokens: Vec<String>,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
