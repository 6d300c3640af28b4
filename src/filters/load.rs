//! Turning a picked file into a pixel array.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{FilterError, Result};

/// File extensions the uploader accepts
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// A picked file held in memory: its name (for the type filter) and bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FilterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file_name(path), bytes))
    }

    /// Read a file from disk without blocking the UI executor
    pub async fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| FilterError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(file_name(path), bytes))
    }

    /// Lower-cased extension of the file name, if any
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    pub fn is_accepted(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decode an upload into an 8-bit pixel array.
///
/// The result is always `Luma8`, `LumaA8`, `Rgb8` or `Rgba8`; deeper
/// formats are narrowed to 8-bit RGB(A).
///
/// # Errors
///
/// Fails when the extension is not accepted or the bytes do not decode.
pub fn load_image(upload: &Upload) -> Result<DynamicImage> {
    if !upload.is_accepted() {
        return Err(FilterError::UnsupportedFormat {
            name: upload.name.clone(),
        });
    }

    let img = ImageReader::new(Cursor::new(upload.bytes.as_slice()))
        .with_guessed_format()?
        .decode()
        .map_err(|source| FilterError::Load { source })?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        upload.name,
        img.width(),
        img.height(),
        img.color()
    );

    Ok(to_8bit(img))
}

fn to_8bit(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => img,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
