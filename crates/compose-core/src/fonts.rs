//! Font loading and discovery.
//!
//! Nothing is embedded in the binary. A font is loaded from an explicit
//! path (config or CLI flag) or discovered from well-known system
//! locations. Measurement and rasterization share the same [`FontStore`]
//! so both agree on glyph advances.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

use imprint_common::error::{ImprintError, ImprintResult};

/// Well-known font locations, tried in order by [`FontStore::discover`].
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/gnu-free/FreeSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
];

/// An owned font used for watermark measurement and rasterization.
pub struct FontStore {
    font: FontVec,
    source: PathBuf,
}

impl std::fmt::Debug for FontStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontStore")
            .field("source", &self.source)
            .finish()
    }
}

impl FontStore {
    /// Load a TTF/OTF font from an explicit path.
    pub fn load(path: impl AsRef<Path>) -> ImprintResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImprintError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| {
            ImprintError::font_unavailable(format!(
                "Failed to parse font {}: {e}",
                path.display()
            ))
        })?;

        tracing::debug!(path = %path.display(), "Font loaded");
        Ok(Self {
            font,
            source: path.to_path_buf(),
        })
    }

    /// Find a usable font among well-known system locations.
    pub fn discover() -> ImprintResult<Self> {
        for candidate in SYSTEM_FONT_CANDIDATES {
            let path = Path::new(candidate);
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(store) => return Ok(store),
                Err(e) => {
                    tracing::debug!(path = candidate, error = %e, "Skipping font candidate");
                }
            }
        }

        Err(ImprintError::font_unavailable(
            "No system font found; supply one explicitly (see the font-path setting)",
        ))
    }

    /// Load the configured font if set, otherwise discover one.
    pub fn from_config(font_path: Option<&Path>) -> ImprintResult<Self> {
        match font_path {
            Some(path) => Self::load(path),
            None => Self::discover(),
        }
    }

    /// The parsed font.
    pub fn font(&self) -> &FontVec {
        &self.font
    }

    /// Where the font came from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_path_is_file_not_found() {
        let err = FontStore::load("/nonexistent/font.ttf").unwrap_err();
        assert!(matches!(err, ImprintError::FileNotFound { .. }));
    }

    #[test]
    fn test_discover_reports_source_when_available() {
        // Font availability depends on the host; only assert consistency.
        if let Ok(store) = FontStore::discover() {
            assert!(store.source().exists());
        }
    }
}
