//! Text measurement.
//!
//! Width comes from glyph advances plus kerning at the configured pixel
//! size. Height is deliberately taken as the font size itself rather than
//! exact glyph extents; every placement rule downstream assumes this
//! approximation, matching the preview behavior.

use ab_glyph::{Font, PxScale, ScaleFont};

use crate::fonts::FontStore;

/// Measured text box in image-logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Rendered advance width.
    pub width: f64,
    /// Nominal height (always the font size).
    pub height: f64,
}

impl TextMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// Measure `text` at `font_size` pixels.
pub fn measure_text(fonts: &FontStore, text: &str, font_size: f32) -> TextMetrics {
    let scale = PxScale::from(font_size);
    let scaled = fonts.font().as_scaled(scale);

    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled.glyph_id(c);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    TextMetrics::new(width as f64, font_size as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fonts() -> Option<FontStore> {
        FontStore::discover().ok()
    }

    #[test]
    fn test_height_equals_font_size() {
        let Some(fonts) = test_fonts() else {
            eprintln!("no system font available, skipping");
            return;
        };
        let metrics = measure_text(&fonts, "Hello", 20.0);
        assert_eq!(metrics.height, 20.0);
        assert_eq!(metrics.half_height(), 10.0);
    }

    #[test]
    fn test_width_grows_with_font_size() {
        let Some(fonts) = test_fonts() else {
            eprintln!("no system font available, skipping");
            return;
        };
        let small = measure_text(&fonts, "Hello", 12.0);
        let large = measure_text(&fonts, "Hello", 48.0);
        assert!(large.width > small.width);
        assert!(small.width > 0.0);
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        let Some(fonts) = test_fonts() else {
            eprintln!("no system font available, skipping");
            return;
        };
        let metrics = measure_text(&fonts, "", 24.0);
        assert_eq!(metrics.width, 0.0);
        assert_eq!(metrics.height, 24.0);
    }
}
