//! Error types shared across Imprint crates.

use std::path::PathBuf;

/// Top-level error type for Imprint operations.
#[derive(Debug, thiserror::Error)]
pub enum ImprintError {
    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("No usable font: {message}")]
    FontUnavailable { message: String },

    #[error("Unsupported format: {message}")]
    UnsupportedFormat { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ImprintError.
pub type ImprintResult<T> = Result<T, ImprintError>;

impl ImprintError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn font_unavailable(msg: impl Into<String>) -> Self {
        Self::FontUnavailable {
            message: msg.into(),
        }
    }

    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
