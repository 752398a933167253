//! Watermark an image and export it.

use std::path::PathBuf;

use anyhow::Context;

use imprint_common::config::AppConfig;
use imprint_compose_core::{measure_text, EditorSession, FontStore};
use imprint_editor_model::geometry::Point2D;
use imprint_editor_model::image_source::ImageSource;
use imprint_editor_model::render_target::ScalePreset;
use imprint_editor_model::watermark::{AnchorMode, Color, WatermarkConfig};
use imprint_render_engine::{export_frame, render_export, write_frame, ExportFormat};

pub struct ExportArgs {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub format: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scale: Option<u32>,
    pub no_lock: bool,
    pub font_size: Option<f32>,
    pub opacity: Option<f32>,
    pub rotation: Option<f32>,
    pub color: Option<String>,
    pub no_shadow: bool,
    pub anchor: Option<String>,
    pub position: Option<String>,
    pub font: Option<PathBuf>,
}

pub async fn run(args: ExportArgs) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let font_path = args.font.or(config.font_path.clone());
    let fonts = FontStore::from_config(font_path.as_deref())?;
    tracing::debug!(font = %fonts.source().display(), "Using font");

    let source = ImageSource::load(&args.path).await?;
    let watermark = WatermarkConfig::from_defaults(&config.watermark)?;
    let mut session = EditorSession::with_watermark(watermark);
    session.set_image(source);

    // Resize controls.
    if args.no_lock {
        session.set_aspect_locked(false);
    }
    if let Some(percent) = args.scale {
        let preset = match percent {
            25 => ScalePreset::P25,
            50 => ScalePreset::P50,
            75 => ScalePreset::P75,
            100 => ScalePreset::P100,
            other => anyhow::bail!("Unsupported scale preset: {other}%. Use 25, 50, 75, or 100"),
        };
        session.set_scale_preset(preset);
    }
    if let Some(width) = args.width {
        session.set_width_input(&width.to_string());
    }
    if let Some(height) = args.height {
        session.set_height_input(&height.to_string());
    }

    // Watermark controls.
    if let Some(size) = args.font_size {
        session.set_font_size(size);
    }
    if let Some(opacity) = args.opacity {
        session.set_opacity(opacity);
    }
    if let Some(rotation) = args.rotation {
        session.set_rotation_degrees(rotation);
    }
    if let Some(hex) = &args.color {
        session.set_color(Color::parse_hex(hex)?);
    }
    if args.no_shadow {
        session.set_shadow(false);
    }
    if let Some(anchor) = &args.anchor {
        session.set_anchor_mode(anchor.parse::<AnchorMode>()?);
    }
    if let Some(position) = &args.position {
        let point = parse_position(position)?;
        session.set_anchor_mode(AnchorMode::Custom);
        let metrics = measure_text(
            &fonts,
            &session.watermark().text,
            session.watermark().font_size,
        );
        session.set_custom_position(point, &metrics);
    }

    let frame = render_export(&session, &fonts)?;

    let written = match args.output {
        Some(path) => {
            let format = ExportFormat::from_path(&path)
                .or_else(|_| args.format.parse::<ExportFormat>())?;
            write_frame(&frame, format, &path)?;
            path
        }
        None => {
            let format = args.format.parse::<ExportFormat>()?;
            export_frame(&frame, format, &args.output_dir)?
        }
    };

    println!(
        "Exported {}x{} -> {}",
        session.target().width(),
        session.target().height(),
        written.display()
    );
    Ok(())
}

/// Parse an "x,y" pair.
fn parse_position(input: &str) -> anyhow::Result<Point2D> {
    let (x, y) = input
        .split_once(',')
        .context("Position must be \"x,y\"")?;
    Ok(Point2D::new(
        x.trim().parse::<f64>().context("Invalid x coordinate")?,
        y.trim().parse::<f64>().context("Invalid y coordinate")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        let p = parse_position("40, 60.5").unwrap();
        assert_eq!((p.x, p.y), (40.0, 60.5));
        assert!(parse_position("40").is_err());
        assert!(parse_position("a,b").is_err());
    }
}
