//! Decoded source images.
//!
//! An [`ImageSource`] is immutable once loaded and replaced wholesale when
//! the user picks a new file. Decoding is the only asynchronous boundary in
//! the system; everything downstream is synchronous computation.

use std::path::Path;

use image::RgbaImage;

use imprint_common::error::{ImprintError, ImprintResult};

/// A decoded bitmap plus its natural (pre-resize) dimensions.
#[derive(Debug, Clone)]
pub struct ImageSource {
    bitmap: RgbaImage,
    natural_width: u32,
    natural_height: u32,
}

impl ImageSource {
    /// Wrap an already-decoded image.
    pub fn from_image(image: image::DynamicImage) -> Self {
        let bitmap = image.to_rgba8();
        let (natural_width, natural_height) = bitmap.dimensions();
        Self {
            bitmap,
            natural_width,
            natural_height,
        }
    }

    /// Decode an image from raw bytes, sniffing the container format.
    pub fn from_bytes(bytes: &[u8]) -> ImprintResult<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| ImprintError::decode(format!("Failed to decode image: {e}")))?;
        Ok(Self::from_image(decoded))
    }

    /// Decode an image whose MIME type is known up front.
    ///
    /// Mirrors the file-picker validation: anything that is not `image/*`
    /// is rejected before a decode is attempted.
    pub fn from_bytes_with_mime(bytes: &[u8], mime: &str) -> ImprintResult<Self> {
        if !mime.starts_with("image/") {
            return Err(ImprintError::unsupported_format(format!(
                "Not an image MIME type: {mime}"
            )));
        }
        Self::from_bytes(bytes)
    }

    /// Load and decode an image file.
    pub async fn load(path: impl AsRef<Path>) -> ImprintResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImprintError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = tokio::fs::read(path).await?;
        let source = Self::from_bytes(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            width = source.natural_width,
            height = source.natural_height,
            "Image decoded"
        );
        Ok(source)
    }

    /// Natural width of the decoded bitmap.
    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    /// Natural height of the decoded bitmap.
    pub fn natural_height(&self) -> u32 {
        self.natural_height
    }

    /// Natural dimensions as a pair.
    pub fn natural_dimensions(&self) -> (u32, u32) {
        (self.natural_width, self.natural_height)
    }

    /// The decoded RGBA pixels.
    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }
}
