//! Frame composition: resize the source, stamp the watermark sprite.
//!
//! Preview and export run the exact same pipeline; the only differences
//! are the device-pixel-ratio scaling applied to the surface and whether
//! the drag affordance is drawn. Keeping one code path is what guarantees
//! the exported file matches the preview.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use imprint_common::error::{ImprintError, ImprintResult};
use imprint_compose_core::{compute_anchor, measure_text, EditorSession, FontStore};
use imprint_editor_model::image_source::ImageSource;
use imprint_editor_model::render_target::RenderTarget;
use imprint_editor_model::watermark::{AnchorMode, WatermarkConfig};

/// Which surface a frame is rendered for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderPass {
    /// The on-screen canvas. The surface is oversampled by the device
    /// pixel ratio and interaction affordances are drawn.
    Preview { device_pixel_ratio: f64 },
    /// The downloadable file: exact target dimensions, no affordances.
    Export,
}

impl RenderPass {
    /// Device-pixel multiplier for this pass.
    pub fn surface_scale(&self) -> f64 {
        match self {
            RenderPass::Preview { device_pixel_ratio } => *device_pixel_ratio,
            RenderPass::Export => 1.0,
        }
    }

    /// Whether interaction-only decorations (the dashed drag box) are
    /// part of this pass.
    pub fn shows_drag_affordance(&self) -> bool {
        matches!(self, RenderPass::Preview { .. })
    }
}

/// Physical surface dimensions for a target under the given pass.
pub fn surface_dimensions(target: &RenderTarget, pass: &RenderPass) -> (u32, u32) {
    let scale = pass.surface_scale();
    (
        ((target.width() as f64 * scale).round() as u32).max(1),
        ((target.height() as f64 * scale).round() as u32).max(1),
    )
}

/// Render one complete frame: the source resized to the target, with the
/// watermark composited at its anchor.
pub fn render_frame(
    source: &ImageSource,
    target: &RenderTarget,
    watermark: &WatermarkConfig,
    fonts: &FontStore,
    pass: RenderPass,
) -> ImprintResult<RgbaImage> {
    let scale = pass.surface_scale();
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ImprintError::render(format!(
            "Surface scale must be positive, got {scale}"
        )));
    }

    let (surface_w, surface_h) = surface_dimensions(target, &pass);
    let mut frame = imageops::resize(source.bitmap(), surface_w, surface_h, FilterType::CatmullRom);

    // Placement runs in image-logical coordinates, then scales up.
    let metrics = measure_text(fonts, &watermark.text, watermark.font_size);
    let anchor = compute_anchor(watermark.anchor, target, &metrics, watermark.custom_position);

    let show_drag_box = pass.shows_drag_affordance() && watermark.anchor == AnchorMode::Custom;
    let sprite = crate::sprite::render_sprite(fonts, watermark, scale as f32, show_drag_box);

    let x = (anchor.x * scale - sprite.width() as f64 / 2.0).round() as i64;
    let y = (anchor.y * scale - sprite.height() as f64 / 2.0).round() as i64;
    imageops::overlay(&mut frame, &sprite, x, y);

    tracing::trace!(
        width = surface_w,
        height = surface_h,
        anchor = watermark.anchor.as_str(),
        ?pass,
        "Frame rendered"
    );
    Ok(frame)
}

/// Render the on-screen preview for a session.
pub fn render_preview(session: &EditorSession, fonts: &FontStore) -> ImprintResult<RgbaImage> {
    let source = session.require_image()?;
    render_frame(
        source,
        session.target(),
        session.watermark(),
        fonts,
        RenderPass::Preview {
            device_pixel_ratio: session.device_pixel_ratio,
        },
    )
}

/// Render the export frame for a session, at exact target dimensions and
/// without preview-only decorations.
pub fn render_export(session: &EditorSession, fonts: &FontStore) -> ImprintResult<RgbaImage> {
    let source = session.require_image()?;
    render_frame(
        source,
        session.target(),
        session.watermark(),
        fonts,
        RenderPass::Export,
    )
}
