//! Render the preview surface to a file.
//!
//! Useful for eyeballing exactly what the editor shows, including the
//! device-pixel-ratio oversampling and the dashed drag affordance in
//! custom anchor mode.

use std::path::PathBuf;

use imprint_common::config::AppConfig;
use imprint_compose_core::{EditorSession, FontStore};
use imprint_editor_model::image_source::ImageSource;
use imprint_editor_model::watermark::{AnchorMode, WatermarkConfig};
use imprint_render_engine::{render_preview, write_frame, ExportFormat};

pub async fn run(
    path: PathBuf,
    output: PathBuf,
    dpr: f64,
    anchor: Option<String>,
    font: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let font_path = font.or(config.font_path.clone());
    let fonts = FontStore::from_config(font_path.as_deref())?;

    let source = ImageSource::load(&path).await?;
    let watermark = WatermarkConfig::from_defaults(&config.watermark)?;
    let mut session = EditorSession::with_watermark(watermark);
    session.set_image(source);
    session.device_pixel_ratio = dpr;

    if let Some(anchor) = &anchor {
        session.set_anchor_mode(anchor.parse::<AnchorMode>()?);
    }

    let frame = render_preview(&session, &fonts)?;
    write_frame(&frame, ExportFormat::Png, &output)?;

    println!(
        "Preview {}x{} (target {}x{} at {dpr}x) -> {}",
        frame.width(),
        frame.height(),
        session.target().width(),
        session.target().height(),
        output.display()
    );
    if session.watermark().anchor == AnchorMode::Custom {
        println!("Drag affordance drawn (custom anchor mode)");
    }
    Ok(())
}
