use thiserror::Error;

/// Failures of the storage backend and of the wish list document it holds.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Failed to write storage: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("Failed to read storage: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("Stored wish list is corrupt: {0}")]
    CorruptData(#[source] serde_json::Error),

    #[error("Failed to serialize wish list: {0}")]
    SerializeError(#[source] serde_json::Error),
}

impl StorageError {
    /// Whether this error came from writing (the in-memory list is ahead of
    /// the persisted copy).
    #[must_use]
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            StorageError::QuotaExceeded { .. }
                | StorageError::WriteError(_)
                | StorageError::SerializeError(_)
        )
    }
}
