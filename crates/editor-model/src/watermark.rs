//! Watermark configuration: text, styling, and anchor placement.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use imprint_common::error::{ImprintError, ImprintResult};

use crate::geometry::Point2D;

/// The watermark text stamped on every composition.
pub const WATERMARK_TEXT: &str = "\u{a9} PromptGet";

/// An RGB fill color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Parse `#RGB` or `#RRGGBB`.
    pub fn parse_hex(hex: &str) -> ImprintResult<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ImprintError::invalid_input("Color must start with '#'"))?;

        let component = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| ImprintError::invalid_input(format!("Invalid hex digit in {hex:?}")))
        };

        match digits.len() {
            3 => {
                // #RGB: each digit doubles, 0xF -> 0xFF
                let r = component(&digits[0..1])?;
                let g = component(&digits[1..2])?;
                let b = component(&digits[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::new(
                component(&digits[0..2])?,
                component(&digits[2..4])?,
                component(&digits[4..6])?,
            )),
            n => Err(ImprintError::invalid_input(format!(
                "Color must be #RGB or #RRGGBB, got {n} digits"
            ))),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The rule selecting where the watermark is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorMode {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Free-form position, draggable in the preview.
    Custom,
}

impl AnchorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorMode::Center => "center",
            AnchorMode::TopLeft => "top-left",
            AnchorMode::TopRight => "top-right",
            AnchorMode::BottomLeft => "bottom-left",
            AnchorMode::BottomRight => "bottom-right",
            AnchorMode::Custom => "custom",
        }
    }
}

impl FromStr for AnchorMode {
    type Err = ImprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(AnchorMode::Center),
            "top-left" => Ok(AnchorMode::TopLeft),
            "top-right" => Ok(AnchorMode::TopRight),
            "bottom-left" => Ok(AnchorMode::BottomLeft),
            "bottom-right" => Ok(AnchorMode::BottomRight),
            "custom" => Ok(AnchorMode::Custom),
            other => Err(ImprintError::invalid_input(format!(
                "Unknown anchor mode: {other}. Use: center, top-left, top-right, \
                 bottom-left, bottom-right, custom"
            ))),
        }
    }
}

/// Full watermark styling and placement state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatermarkConfig {
    /// The text to stamp.
    pub text: String,

    /// Font size in image-logical pixels.
    pub font_size: f32,

    /// Opacity in [0.0, 1.0].
    pub opacity: f32,

    /// Rotation in degrees, applied about the text center at render time.
    pub rotation_degrees: f32,

    /// Fill color.
    pub color: Color,

    /// Whether to draw the fixed drop shadow.
    pub shadow: bool,

    /// Placement rule.
    pub anchor: AnchorMode,

    /// Free position in image-logical coordinates; meaningful only when
    /// `anchor` is [`AnchorMode::Custom`].
    pub custom_position: Point2D,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: WATERMARK_TEXT.to_string(),
            font_size: 48.0,
            opacity: 0.7,
            rotation_degrees: 0.0,
            color: Color::white(),
            shadow: true,
            anchor: AnchorMode::BottomRight,
            custom_position: Point2D::new(0.0, 0.0),
        }
    }
}

impl WatermarkConfig {
    /// Build a config from persisted defaults.
    pub fn from_defaults(defaults: &imprint_common::config::WatermarkDefaults) -> ImprintResult<Self> {
        Ok(Self {
            text: WATERMARK_TEXT.to_string(),
            font_size: defaults.font_size,
            opacity: defaults.opacity.clamp(0.0, 1.0),
            rotation_degrees: defaults.rotation_degrees,
            color: Color::parse_hex(&defaults.color)?,
            shadow: defaults.shadow,
            anchor: defaults.anchor.parse()?,
            custom_position: Point2D::new(0.0, 0.0),
        })
    }

    /// Rotation in radians.
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rrggbb() {
        assert_eq!(Color::parse_hex("#FF0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::parse_hex("#00ff00").unwrap(), Color::new(0, 255, 0));
        assert_eq!(
            Color::parse_hex("#123456").unwrap(),
            Color::new(0x12, 0x34, 0x56)
        );
    }

    #[test]
    fn test_parse_hex_rgb_doubles_digits() {
        assert_eq!(Color::parse_hex("#F00").unwrap(), Color::new(255, 0, 0));
        assert_eq!(
            Color::parse_hex("#ABC").unwrap(),
            Color::new(170, 187, 204)
        );
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert!(Color::parse_hex("FF0000").is_err());
        assert!(Color::parse_hex("#FF00").is_err());
        assert!(Color::parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color::new(18, 52, 86);
        assert_eq!(Color::parse_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_anchor_mode_round_trip() {
        for mode in [
            AnchorMode::Center,
            AnchorMode::TopLeft,
            AnchorMode::TopRight,
            AnchorMode::BottomLeft,
            AnchorMode::BottomRight,
            AnchorMode::Custom,
        ] {
            assert_eq!(mode.as_str().parse::<AnchorMode>().unwrap(), mode);
        }
        assert!("middle".parse::<AnchorMode>().is_err());
    }

    #[test]
    fn test_rotation_radians() {
        let config = WatermarkConfig {
            rotation_degrees: 180.0,
            ..Default::default()
        };
        assert!((config.rotation_radians() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_from_defaults_validates_color() {
        let mut defaults = imprint_common::config::WatermarkDefaults::default();
        defaults.color = "not-a-color".to_string();
        assert!(WatermarkConfig::from_defaults(&defaults).is_err());
    }
}
