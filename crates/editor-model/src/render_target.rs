//! Requested output dimensions and resize rules.
//!
//! The render target is what the user asked for, not what the source
//! provides. Width and height are always at least 1, and the aspect-lock
//! rule recomputes the untouched axis from the source's natural ratio.

use serde::{Deserialize, Serialize};

/// Scale presets offered by the resize controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePreset {
    P25,
    P50,
    P75,
    P100,
    Custom,
}

impl ScalePreset {
    /// The percentage this preset represents, if fixed.
    pub fn percent(&self) -> Option<u32> {
        match self {
            ScalePreset::P25 => Some(25),
            ScalePreset::P50 => Some(50),
            ScalePreset::P75 => Some(75),
            ScalePreset::P100 => Some(100),
            ScalePreset::Custom => None,
        }
    }
}

/// The output pixel dimensions requested by the user.
///
/// Invariant: both dimensions are >= 1 at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderTarget {
    width: u32,
    height: u32,
}

impl RenderTarget {
    /// Create a target, clamping both dimensions to at least 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Target matching the source's natural size.
    pub fn from_natural(natural: (u32, u32)) -> Self {
        Self::new(natural.0, natural.1)
    }

    /// Target at a fixed percentage of the natural size.
    pub fn from_scale(natural: (u32, u32), percent: u32) -> Self {
        let scale = percent as f64 / 100.0;
        Self::new(
            (natural.0 as f64 * scale).round() as u32,
            (natural.1 as f64 * scale).round() as u32,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the width. When `locked` the height is recomputed from the
    /// natural aspect ratio as `round(width * nh / nw)`.
    pub fn set_width(&mut self, width: u32, natural: (u32, u32), locked: bool) {
        self.width = width.max(1);
        if locked {
            self.height = locked_height(natural, self.width);
        }
    }

    /// Set the height. When `locked` the width is recomputed from the
    /// natural aspect ratio as `round(height * nw / nh)`.
    pub fn set_height(&mut self, height: u32, natural: (u32, u32), locked: bool) {
        self.height = height.max(1);
        if locked {
            self.width = locked_width(natural, self.height);
        }
    }
}

/// Height implied by the natural aspect ratio for a given width.
pub fn locked_height(natural: (u32, u32), width: u32) -> u32 {
    let (nw, nh) = (natural.0.max(1) as f64, natural.1.max(1) as f64);
    ((width as f64 / nw) * nh).round().max(1.0) as u32
}

/// Width implied by the natural aspect ratio for a given height.
pub fn locked_width(natural: (u32, u32), height: u32) -> u32 {
    let (nw, nh) = (natural.0.max(1) as f64, natural.1.max(1) as f64);
    ((height as f64 / nh) * nw).round().max(1.0) as u32
}

/// Parse a dimension text field. Anything that does not parse to a
/// positive integer degrades to 1, the minimum valid dimension.
pub fn parse_dimension(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(v) if v >= 1 => v.min(u32::MAX as i64) as u32,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dimensions_never_below_one() {
        let target = RenderTarget::new(0, 0);
        assert_eq!((target.width(), target.height()), (1, 1));
    }

    #[test]
    fn test_scale_preset_half() {
        let target = RenderTarget::from_scale((200, 100), 50);
        assert_eq!((target.width(), target.height()), (100, 50));
    }

    #[test]
    fn test_locked_width_edit_recomputes_height() {
        let mut target = RenderTarget::from_natural((200, 100));
        target.set_width(150, (200, 100), true);
        assert_eq!(target.height(), 75);
    }

    #[test]
    fn test_locked_height_edit_recomputes_width() {
        let mut target = RenderTarget::from_natural((200, 100));
        target.set_height(25, (200, 100), true);
        assert_eq!(target.width(), 50);
    }

    #[test]
    fn test_unlocked_edit_leaves_other_axis() {
        let mut target = RenderTarget::from_natural((200, 100));
        target.set_width(10, (200, 100), false);
        assert_eq!(target.height(), 100);
    }

    #[test]
    fn test_parse_dimension_degrades_to_one() {
        assert_eq!(parse_dimension("800"), 800);
        assert_eq!(parse_dimension("  640 "), 640);
        assert_eq!(parse_dimension("abc"), 1);
        assert_eq!(parse_dimension(""), 1);
        assert_eq!(parse_dimension("0"), 1);
        assert_eq!(parse_dimension("-20"), 1);
    }

    proptest! {
        #[test]
        fn prop_locked_width_edit_matches_ratio(
            nw in 1u32..4096,
            nh in 1u32..4096,
            width in 1u32..8192,
        ) {
            let mut target = RenderTarget::from_natural((nw, nh));
            target.set_width(width, (nw, nh), true);
            let expected = ((width as f64 / nw as f64) * nh as f64).round().max(1.0) as u32;
            prop_assert_eq!(target.height(), expected);
            prop_assert!(target.height() >= 1);
        }

        #[test]
        fn prop_locked_height_edit_matches_ratio(
            nw in 1u32..4096,
            nh in 1u32..4096,
            height in 1u32..8192,
        ) {
            let mut target = RenderTarget::from_natural((nw, nh));
            target.set_height(height, (nw, nh), true);
            let expected = ((height as f64 / nh as f64) * nw as f64).round().max(1.0) as u32;
            prop_assert_eq!(target.width(), expected);
            prop_assert!(target.width() >= 1);
        }
    }
}
