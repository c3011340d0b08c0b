use thiserror::Error;

/// Failures of the photo ingestion pipeline.
#[derive(Error, Debug)]
pub enum ImageCodecError {
    #[error("Failed to read image file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("File is not a decodable image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),
}
