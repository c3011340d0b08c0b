//! Errors surfaced by wish operations.

use crate::photo::ImageCodecError;
use crate::store::StorageError;
use thiserror::Error;

/// Unified error type for adding, opening and removing wishes.
#[derive(Error, Debug)]
pub enum WishError {
    #[error("A wish needs a name")]
    EmptyName,

    #[error("Wish not found: {0}")]
    NotFound(String),

    #[error("Image error: {0}")]
    Image(#[from] ImageCodecError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to open link: {0}")]
    OpenLink(#[source] std::io::Error),
}

impl WishError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        WishError::NotFound(id.into())
    }
}
