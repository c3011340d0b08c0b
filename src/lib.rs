// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod logging;
pub mod photo;
pub mod render;
pub mod store;
pub mod user_config;
pub mod utils;
pub mod wish;

// Re-export commonly used types
pub use app::{
    LinkOpener, OpenOutcome, Prompt, RemoveOutcome, SubmitOutcome, WishForm, WishlistApp,
};
pub use photo::{
    initials, EncodedImage, ImageCodec, ImageCodecError, ImageDecoder, InlineImage,
    PlaceholderGenerator,
};
pub use render::{HtmlRenderer, ItemView, LinkView, ListRenderer, ListView, RenderError};
pub use store::{FileStorage, MemoryStorage, Storage, StorageError, WishStore};
pub use user_config::{load_user_config, UserConfig, UserConfigError};
pub use wish::{WishDraft, WishError, WishId, WishItem, WishList};
