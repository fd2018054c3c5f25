//! Error types for paperclips.
//!
//! Storage failures are reported as [`PersistenceError`], counter failures as
//! [`CounterError`], and everything the CLI can hit is folded into
//! [`PaperclipsError`].

use std::path::PathBuf;

use thiserror::Error;

use crate::storage::MAX_DAILY_PAPERCLIPS;

/// Failure reading or writing one of the JSON state files.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file (or its temporary sibling) could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not valid for the schema.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but holds values outside their allowed range.
    #[error("invalid contents in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    /// In-memory state could not be serialized.
    #[error("failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Failure of a daily counter operation.
#[derive(Debug, Error)]
pub enum CounterError {
    /// A daily goal must be between 1 and `MAX_DAILY_PAPERCLIPS`.
    #[error("daily goal must be between 1 and {max}, got {0}", max = MAX_DAILY_PAPERCLIPS)]
    InvalidGoal(i64),

    /// The change was applied in memory but could not be saved.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Top-level error for the paperclips CLI.
#[derive(Debug, Error)]
pub enum PaperclipsError {
    #[error(transparent)]
    Counter(#[from] CounterError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Configuration or path resolution problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// A `--date` value that could not be understood.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// JSON output formatting failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}
