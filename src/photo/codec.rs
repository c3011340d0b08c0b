use super::error::ImageCodecError;
use super::inline::{InlineImage, MIME_JPEG};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, GenericImageView, ImageDecoder as _, ImageEncoder, ImageReader};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Width bound applied to uploaded photos
pub const DEFAULT_MAX_WIDTH: u32 = 900;

/// JPEG quality used for re-encoded photos (0.85 on a 0..1 scale)
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Turns raw file bytes into a bitmap.
///
/// Substitutable so callers and tests can feed bitmaps without going
/// through a real file format.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ImageCodecError>;
}

/// Decoder backed by the `image` crate's format sniffing.
///
/// The bitmap comes back upright: an EXIF orientation tag is applied, so a
/// rotated phone photo reports the dimensions it is displayed with.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDecoder;

impl ImageDecoder for StandardDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ImageCodecError> {
        let decode_error = |e: image::ImageError| ImageCodecError::DecodeError(e.to_string());
        let mut decoder = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_decoder()
            .map_err(decode_error)?;
        let orientation = decoder.orientation().unwrap_or_else(|e| {
            debug!("Ignoring unreadable orientation tag: {e}");
            Orientation::NoTransforms
        });
        let mut img = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
        img.apply_orientation(orientation);
        Ok(img)
    }
}

/// Result of encoding one photo.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub image: InlineImage,
    pub width: u32,
    pub height: u32,
    pub original_width: u32,
    pub original_height: u32,
    pub resized: bool,
}

/// Downscales photos to a width bound and re-encodes them as JPEG.
#[derive(Clone)]
pub struct ImageCodec {
    decoder: Arc<dyn ImageDecoder>,
    jpeg_quality: u8,
}

impl ImageCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::with_decoder(Arc::new(StandardDecoder))
    }

    #[must_use]
    pub fn with_decoder(decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            decoder,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Override the JPEG quality (clamped to 1..=100).
    #[must_use]
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    #[must_use]
    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// Read a photo from disk and encode it.
    ///
    /// A file that cannot be read fails with [`ImageCodecError::ReadError`];
    /// one that is not an image fails with [`ImageCodecError::DecodeError`].
    pub async fn encode_file(
        &self,
        path: &Path,
        max_width: u32,
    ) -> Result<EncodedImage, ImageCodecError> {
        let bytes = tokio::fs::read(path).await?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        self.encode(bytes, max_width).await
    }

    /// Decode `bytes`, shrink to at most `max_width` pixels wide keeping the
    /// aspect ratio, and re-encode as JPEG.
    ///
    /// Decoding and encoding run on the blocking pool; the caller suspends
    /// until both finish. Images already within the bound are not upscaled.
    pub async fn encode(
        &self,
        bytes: Vec<u8>,
        max_width: u32,
    ) -> Result<EncodedImage, ImageCodecError> {
        let decoder = Arc::clone(&self.decoder);
        let quality = self.jpeg_quality;
        tokio::task::spawn_blocking(move || {
            encode_blocking(decoder.as_ref(), &bytes, max_width, quality)
        })
        .await
        .map_err(|e| ImageCodecError::EncodeError(e.to_string()))?
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ImageCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCodec")
            .field("jpeg_quality", &self.jpeg_quality)
            .finish_non_exhaustive()
    }
}

/// Compute the output size for an image of `width` x `height` under a width
/// bound. Height follows the original aspect ratio, rounded to the nearest
/// pixel and never below 1.
#[must_use]
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    let max_width = max_width.max(1);
    if width <= max_width {
        return (width, height);
    }
    (max_width, scale_u32(height, max_width, width).max(1))
}

fn scale_u32(value: u32, numerator: u32, denominator: u32) -> u32 {
    let den = u64::from(denominator).max(1);
    let num = u64::from(value) * u64::from(numerator);
    let rounded = (num + den / 2) / den;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

fn encode_blocking(
    decoder: &dyn ImageDecoder,
    bytes: &[u8],
    max_width: u32,
    quality: u8,
) -> Result<EncodedImage, ImageCodecError> {
    let img = decoder.decode(bytes)?;
    let (original_width, original_height) = img.dimensions();
    let (width, height) = target_dimensions(original_width, original_height, max_width);
    let resized = (width, height) != (original_width, original_height);

    let raster = if resized {
        img.resize_exact(width, height, FilterType::Lanczos3)
    } else {
        img
    };

    let rgb = raster.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageCodecError::EncodeError(e.to_string()))?;

    debug!(
        original_width,
        original_height,
        width,
        height,
        encoded_bytes = out.len(),
        "Encoded photo"
    );

    Ok(EncodedImage {
        image: InlineImage::from_bytes(MIME_JPEG, &out),
        width,
        height,
        original_width,
        original_height,
        resized,
    })
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
