//! Error types for filterdeck.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading or filtering an image.
///
/// The `Display` text of each variant is what the user sees, so the
/// stage-specific variants carry the same prefix the UI shows.
#[derive(Error, Debug)]
pub enum FilterError {
    /// File extension is not one the uploader accepts.
    #[error("Error loading image: unsupported file type {name:?} (expected jpg, png or jpeg)")]
    UnsupportedFormat { name: String },

    /// Bytes could not be decoded as an image.
    #[error("Error loading image: {source}")]
    Load {
        #[source]
        source: image::ImageError,
    },

    /// Picked file could not be read from disk.
    #[error("Error loading image: failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error applying blur: {reason}")]
    Blur { reason: String },

    #[error("Error adjusting brightness: {reason}")]
    Brighten { reason: String },

    #[error("Error enhancing details: {reason}")]
    Enhance { reason: String },

    /// A filter parameter is outside the range the controls allow.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Failed to write an image (export or debug dump).
    #[error("failed to save image to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for filterdeck operations.
pub type Result<T> = std::result::Result<T, FilterError>;
