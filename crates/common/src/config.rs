//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default watermark settings applied to a fresh session.
    pub watermark: WatermarkDefaults,

    /// JPEG encode quality (1-100).
    pub jpeg_quality: u8,

    /// Explicit font file to use for watermark text. When unset, the
    /// font is discovered from well-known system locations.
    pub font_path: Option<PathBuf>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default watermark parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatermarkDefaults {
    /// Font size in pixels.
    pub font_size: f32,

    /// Opacity in [0.0, 1.0].
    pub opacity: f32,

    /// Rotation in degrees.
    pub rotation_degrees: f32,

    /// Fill color as a hex string ("#RGB" or "#RRGGBB").
    pub color: String,

    /// Whether to draw the drop shadow.
    pub shadow: bool,

    /// Default anchor mode name (center, top-left, top-right,
    /// bottom-left, bottom-right, custom).
    pub anchor: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "imprint=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            watermark: WatermarkDefaults::default(),
            jpeg_quality: 92,
            font_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WatermarkDefaults {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            opacity: 0.7,
            rotation_degrees: 0.0,
            color: "#FFFFFF".to_string(),
            shadow: true,
            anchor: "bottom-right".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("imprint").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = AppConfig::default();
        assert_eq!(config.jpeg_quality, 92);
        assert!(config.watermark.opacity >= 0.0 && config.watermark.opacity <= 1.0);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn config_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let mut config = AppConfig::default();
        config.jpeg_quality = 80;
        config.watermark.anchor = "center".to_string();
        config.save().unwrap();

        assert!(dir.path().join("imprint").join("config.json").exists());
        let loaded = AppConfig::load();
        assert_eq!(loaded.jpeg_quality, 80);
        assert_eq!(loaded.watermark.anchor, "center");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.jpeg_quality, config.jpeg_quality);
        assert_eq!(parsed.watermark.color, config.watermark.color);
    }
}
