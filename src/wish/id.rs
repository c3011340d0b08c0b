//! Wish identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a wish.
///
/// New wishes get a UUID v4; identifiers read back from storage are kept
/// verbatim whatever their shape (older lists used millisecond timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WishId(String);

impl WishId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Generate a fresh identifier for a new wish.
#[must_use]
pub fn new_wish_id() -> WishId {
    WishId(uuid::Uuid::new_v4().to_string())
}

impl fmt::Display for WishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
