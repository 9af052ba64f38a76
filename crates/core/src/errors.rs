//! Error taxonomy shared by the core and reported over the command surface.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::index::IndexError;

/// Errors surfaced by core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No vault registered under this name.
    #[error("vault not found: {0}")]
    VaultNotFound(String),

    /// A vault with this name is already registered.
    #[error("vault already exists: {0}")]
    VaultExists(String),

    /// The requested root would overlap another vault's storage.
    #[error("vault root overlaps an existing vault: {0}")]
    RootOverlap(String),

    /// No note with this title in the vault.
    #[error("note not found in vault '{vault}': {title}")]
    NoteNotFound { vault: String, title: String },

    /// Title is empty or contains path-unsafe characters.
    #[error("invalid title: {0}")]
    InvalidTitle(String),

    /// Underlying file-system failure.
    #[error("storage failure: {0}")]
    Storage(#[from] std::io::Error),

    /// Index database failure.
    #[error("index failure: {0}")]
    Index(#[from] IndexError),

    /// Configuration failure during workspace startup.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A lock guarding shared state was poisoned by a panicking thread.
    #[error("internal lock poisoned")]
    LockPoisoned,
}

/// Wire-level error categories, stable across commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidInput,
    StorageFailure,
}

impl CoreError {
    /// Collapse the detailed error into its wire category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::VaultNotFound(_) | CoreError::NoteNotFound { .. } => {
                ErrorKind::NotFound
            }
            CoreError::VaultExists(_) => ErrorKind::AlreadyExists,
            CoreError::InvalidTitle(_) | CoreError::RootOverlap(_) => {
                ErrorKind::InvalidInput
            }
            CoreError::Storage(_)
            | CoreError::Index(_)
            | CoreError::Config(_)
            | CoreError::LockPoisoned => ErrorKind::StorageFailure,
        }
    }
}
