//! Storage error handling
//!
//! Typed errors for row-store operations. Missing-id lookups surface as
//! `RowNotFound`; notes referencing categories that don't exist are
//! rejected with `UnknownCategory`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::RowId;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// A row with the given id does not exist
    #[error("{table} row not found: {id}")]
    RowNotFound { table: &'static str, id: RowId },

    /// A note referenced a category id that doesn't exist
    #[error("Unknown category id: {id}")]
    UnknownCategory { id: RowId },

    /// Failed to create data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StorageError {
    /// True for the expected "asked for something that isn't there" cases,
    /// which callers typically report rather than abort on.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::RowNotFound { .. } | StorageError::UnknownCategory { .. }
        )
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
