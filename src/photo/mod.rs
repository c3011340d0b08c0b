//! Photo ingestion and placeholder synthesis.
//!
//! Uploaded photos are downscaled and re-encoded as JPEG before they are
//! stored inline with the wish. Items without a photo get a generated PNG
//! showing their initials at render time.

mod codec;
mod error;
mod inline;
mod placeholder;

pub use codec::{
    target_dimensions, EncodedImage, ImageCodec, ImageDecoder, StandardDecoder,
    DEFAULT_JPEG_QUALITY, DEFAULT_MAX_WIDTH,
};
pub use error::ImageCodecError;
pub use inline::{InlineImage, MIME_JPEG, MIME_PNG};
pub use placeholder::{
    initials, PlaceholderGenerator, PLACEHOLDER_GLYPH_SIZE, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH,
};
