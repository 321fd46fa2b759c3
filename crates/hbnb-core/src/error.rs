//! Error types for HBNB storage

use hbnb_types::RecordKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Malformed storage file {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("{0} has no table in this store")]
    Unmapped(RecordKind),

    #[error("Password error: {0}")]
    Password(String),
}

impl StorageError {
    pub fn database(e: impl std::fmt::Display) -> Self {
        StorageError::Database(e.to_string())
    }

    /// True when the error only says the storage file does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}
