use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// MIME type of re-encoded photo uploads
pub const MIME_JPEG: &str = "image/jpeg";

/// MIME type of generated placeholders
pub const MIME_PNG: &str = "image/png";

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A self-contained image payload in data URL form
/// (`data:<mime>;base64,<bytes>`).
///
/// It can be used directly as an image source and is stored verbatim in the
/// persisted wish list. Values read back from storage are kept as-is, even if
/// they were produced by another writer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineImage(String);

impl InlineImage {
    /// Encode raw image bytes of the given MIME type.
    #[must_use]
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!(
            "{DATA_PREFIX}{mime_type}{BASE64_MARKER}{}",
            STANDARD.encode(bytes)
        ))
    }

    /// Wrap an already encoded data URL.
    #[must_use]
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The MIME type embedded in the payload, if it is a well-formed data URL.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix(DATA_PREFIX)?;
        let (mime, _) = rest.split_once(BASE64_MARKER)?;
        Some(mime)
    }

    /// Decode the embedded image bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        let rest = self.0.strip_prefix(DATA_PREFIX)?;
        let (_, data) = rest.split_once(BASE64_MARKER)?;
        STANDARD.decode(data).ok()
    }
}

impl fmt::Display for InlineImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<InlineImage> for String {
    fn from(image: InlineImage) -> Self {
        image.0
    }
}
