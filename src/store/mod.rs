//! Persistence of the wish list.
//!
//! The whole list lives as one JSON document under a fixed key of a
//! [`Storage`] backend and is rewritten in full after every mutation.

mod error;
mod storage;
mod wish_store;

pub use error::StorageError;
pub use storage::{FileStorage, MemoryStorage, Storage, DEFAULT_QUOTA_BYTES};
pub use wish_store::{WishStore, DEFAULT_STORAGE_KEY};
