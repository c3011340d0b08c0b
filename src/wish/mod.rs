//! Wish items and the ordered list that holds them.

mod error;
mod id;
mod types;

pub use error::WishError;
pub use id::{new_wish_id, WishId};
pub use types::{WishDraft, WishItem, WishList};
