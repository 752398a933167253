//! Frame encoding and file export.
//!
//! PNG is lossless; JPEG is encoded at a fixed quality of 92 over an
//! opaque background (the frame is fully covered by the resized source,
//! so dropping alpha is a no-op in practice). Generated filenames carry a
//! millisecond timestamp so repeated exports never collide.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbaImage};

use imprint_common::error::{ImprintError, ImprintResult};

/// Fixed JPEG encode quality.
pub const JPEG_QUALITY: u8 = 92;

/// Supported export containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    /// The file extension used for generated filenames.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> ImprintResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                ImprintError::unsupported_format(format!(
                    "No file extension on {}",
                    path.display()
                ))
            })?;
        ext.parse()
    }
}

impl FromStr for ExportFormat {
    type Err = ImprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            other => Err(ImprintError::unsupported_format(format!(
                "Unsupported export format: {other}. Use png or jpeg"
            ))),
        }
    }
}

/// Encode a rendered frame into the chosen container.
pub fn encode_frame(frame: &RgbaImage, format: ExportFormat) -> ImprintResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => {
            frame
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .map_err(|e| ImprintError::export(format!("PNG encode failed: {e}")))?;
        }
        ExportFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(frame.clone()).to_rgb8();
            let mut cursor = Cursor::new(&mut bytes);
            let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
            rgb.write_with_encoder(encoder)
                .map_err(|e| ImprintError::export(format!("JPEG encode failed: {e}")))?;
        }
    }
    Ok(bytes)
}

/// The generated download filename for an export at `timestamp`.
pub fn export_filename(format: ExportFormat, timestamp: DateTime<Utc>) -> String {
    format!(
        "watermarked_PromptGet_{}.{}",
        timestamp.timestamp_millis(),
        format.extension()
    )
}

/// Encode and write a frame into `dir` under a generated timestamped
/// filename. Returns the full path of the written file.
pub fn export_frame(
    frame: &RgbaImage,
    format: ExportFormat,
    dir: &Path,
) -> ImprintResult<PathBuf> {
    let path = dir.join(export_filename(format, Utc::now()));
    write_frame(frame, format, &path)?;
    Ok(path)
}

/// Encode and write a frame to an explicit path.
pub fn write_frame(frame: &RgbaImage, format: ExportFormat, path: &Path) -> ImprintResult<()> {
    let bytes = encode_frame(frame, format)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(
        path = %path.display(),
        format = format.extension(),
        bytes = bytes.len(),
        "Frame exported"
    );
    Ok(())
}
