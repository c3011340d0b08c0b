//! The wishlist as the user drives it: submitting the add form, previewing
//! a photo, opening a link and removing a wish.

mod prompt;
mod wishlist_app;

pub use prompt::{
    LinkOpener, Prompt, NAME_REQUIRED_MESSAGE, NO_LINK_MESSAGE, REMOVE_CONFIRM_MESSAGE,
    SAVE_FAILED_MESSAGE,
};
pub use wishlist_app::{OpenOutcome, RemoveOutcome, SubmitOutcome, WishForm, WishlistApp};
