//! The editor session: one explicit state struct instead of scattered
//! globals.
//!
//! Event handlers become thin methods here. Mutators silently do nothing
//! until an image is loaded, mirroring the original UI's degrade-to-no-op
//! behavior; rendering and export surface [`ImprintError::NoImageLoaded`]
//! instead.

use imprint_common::error::{ImprintError, ImprintResult};
use imprint_editor_model::geometry::{CanvasRect, Point2D};
use imprint_editor_model::image_source::ImageSource;
use imprint_editor_model::render_target::{parse_dimension, RenderTarget, ScalePreset};
use imprint_editor_model::watermark::{AnchorMode, Color, WatermarkConfig};

use crate::anchor::clamp_custom_position;
use crate::drag::{DragController, DragState, PointerKind};
use crate::mapper::map_to_image_space;
use crate::metrics::TextMetrics;

/// All mutable editor state, mutated exclusively by the event thread.
#[derive(Debug)]
pub struct EditorSession {
    image: Option<ImageSource>,
    target: RenderTarget,
    watermark: WatermarkConfig,
    aspect_locked: bool,
    scale: ScalePreset,
    /// Cosmetic grid overlay flag; never reaches the compositor.
    pub show_grid: bool,
    /// Device pixel ratio used for preview sharpness only.
    pub device_pixel_ratio: f64,
    drag: DragController,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            image: None,
            target: RenderTarget::new(1, 1),
            watermark: WatermarkConfig::default(),
            aspect_locked: true,
            scale: ScalePreset::P100,
            show_grid: false,
            device_pixel_ratio: 1.0,
            drag: DragController::new(),
        }
    }

    pub fn with_watermark(watermark: WatermarkConfig) -> Self {
        Self {
            watermark,
            ..Self::new()
        }
    }

    /// Replace the loaded image wholesale: target snaps to the natural
    /// size, the scale preset resets, and the custom watermark position
    /// re-centers.
    pub fn set_image(&mut self, source: ImageSource) {
        let natural = source.natural_dimensions();
        self.target = RenderTarget::from_natural(natural);
        self.scale = ScalePreset::P100;
        self.watermark.custom_position =
            Point2D::new(natural.0 as f64 / 2.0, natural.1 as f64 / 2.0);
        self.drag = DragController::new();
        tracing::debug!(width = natural.0, height = natural.1, "Image replaced");
        self.image = Some(source);
    }

    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    /// The loaded image, or `NoImageLoaded` for render/export paths.
    pub fn require_image(&self) -> ImprintResult<&ImageSource> {
        self.image.as_ref().ok_or(ImprintError::NoImageLoaded)
    }

    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    pub fn watermark(&self) -> &WatermarkConfig {
        &self.watermark
    }

    pub fn aspect_locked(&self) -> bool {
        self.aspect_locked
    }

    pub fn scale_preset(&self) -> ScalePreset {
        self.scale
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    // Resize controls

    /// Apply a scale preset. Custom leaves the explicit dimensions alone.
    pub fn set_scale_preset(&mut self, preset: ScalePreset) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        self.scale = preset;
        if let Some(percent) = preset.percent() {
            self.target = RenderTarget::from_scale(image.natural_dimensions(), percent);
        }
    }

    /// Width text-field edit. Non-numeric input degrades to 1.
    pub fn set_width_input(&mut self, input: &str) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        self.scale = ScalePreset::Custom;
        let width = parse_dimension(input);
        self.target
            .set_width(width, image.natural_dimensions(), self.aspect_locked);
    }

    /// Height text-field edit. Non-numeric input degrades to 1.
    pub fn set_height_input(&mut self, input: &str) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        self.scale = ScalePreset::Custom;
        let height = parse_dimension(input);
        self.target
            .set_height(height, image.natural_dimensions(), self.aspect_locked);
    }

    /// Toggle the aspect lock. Engaging it immediately re-derives the
    /// height from the current width.
    pub fn set_aspect_locked(&mut self, locked: bool) {
        self.aspect_locked = locked;
        if locked {
            if let Some(image) = self.image.as_ref() {
                let width = self.target.width();
                self.target
                    .set_width(width, image.natural_dimensions(), true);
            }
        }
    }

    // Watermark controls

    pub fn set_font_size(&mut self, font_size: f32) {
        self.watermark.font_size = font_size.max(1.0);
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.watermark.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.watermark.rotation_degrees = degrees;
    }

    pub fn set_color(&mut self, color: Color) {
        self.watermark.color = color;
    }

    pub fn set_shadow(&mut self, shadow: bool) {
        self.watermark.shadow = shadow;
    }

    pub fn set_anchor_mode(&mut self, mode: AnchorMode) {
        self.watermark.anchor = mode;
        if mode != AnchorMode::Custom {
            self.drag.pointer_up();
        }
    }

    /// Store a custom position, clamped so the text box stays in bounds.
    pub fn set_custom_position(&mut self, position: Point2D, metrics: &TextMetrics) {
        self.watermark.custom_position =
            clamp_custom_position(position, &self.target, metrics);
    }

    // Pointer events (preview canvas)

    /// Pointer pressed on the preview. Engages a drag only when the
    /// anchor mode is Custom and the point lands inside the watermark's
    /// hit box. Returns true when the drag started.
    pub fn pointer_down(
        &mut self,
        screen: Point2D,
        canvas_rect: &CanvasRect,
        kind: PointerKind,
        metrics: &TextMetrics,
    ) -> bool {
        if self.image.is_none() || self.watermark.anchor != AnchorMode::Custom {
            return false;
        }

        let point = map_to_image_space(screen, canvas_rect, &self.target);
        let center =
            clamp_custom_position(self.watermark.custom_position, &self.target, metrics);
        self.drag.pointer_down(point, center, metrics, kind)
    }

    /// Pointer moved. While dragging, the mapped position is clamped and
    /// stored; returns true when a re-render is needed.
    pub fn pointer_move(
        &mut self,
        screen: Point2D,
        canvas_rect: &CanvasRect,
        metrics: &TextMetrics,
    ) -> bool {
        if self.image.is_none() {
            return false;
        }

        let point = map_to_image_space(screen, canvas_rect, &self.target);
        match self.drag.pointer_move(point) {
            Some(raw) => {
                self.set_custom_position(raw, metrics);
                true
            }
            None => false,
        }
    }

    /// Pointer released or touch ended. Returns true when a drag was
    /// active (the preview repaints once more).
    pub fn pointer_up(&mut self) -> bool {
        self.drag.pointer_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn test_image(width: u32, height: u32) -> ImageSource {
        ImageSource::from_image(image::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([10, 20, 30, 255]),
        )))
    }

    fn metrics() -> TextMetrics {
        TextMetrics::new(60.0, 20.0)
    }

    #[test]
    fn test_mutators_are_noops_without_image() {
        let mut session = EditorSession::new();
        session.set_width_input("500");
        session.set_scale_preset(ScalePreset::P50);
        assert_eq!(session.target().width(), 1);
        assert!(matches!(
            session.require_image().unwrap_err(),
            ImprintError::NoImageLoaded
        ));
    }

    #[test]
    fn test_set_image_resets_target_and_centers_watermark() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        assert_eq!(session.target().width(), 200);
        assert_eq!(session.target().height(), 100);
        assert_eq!(session.scale_preset(), ScalePreset::P100);
        assert_eq!(
            session.watermark().custom_position,
            Point2D::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_scale_preset_resizes_target() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_scale_preset(ScalePreset::P50);
        assert_eq!(session.target().width(), 100);
        assert_eq!(session.target().height(), 50);
    }

    #[test]
    fn test_width_edit_with_lock_recomputes_height() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_width_input("150");
        assert_eq!(session.scale_preset(), ScalePreset::Custom);
        assert_eq!(session.target().height(), 75);
    }

    #[test]
    fn test_width_edit_unlocked_keeps_height() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_aspect_locked(false);
        session.set_width_input("150");
        assert_eq!(session.target().height(), 100);
    }

    #[test]
    fn test_relocking_rederives_height_from_width() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_aspect_locked(false);
        session.set_height_input("999");
        session.set_aspect_locked(true);
        assert_eq!(session.target().height(), 100);
    }

    #[test]
    fn test_garbage_width_degrades_to_one() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_aspect_locked(false);
        session.set_width_input("bogus");
        assert_eq!(session.target().width(), 1);
    }

    #[test]
    fn test_opacity_clamped() {
        let mut session = EditorSession::new();
        session.set_opacity(3.5);
        assert_eq!(session.watermark().opacity, 1.0);
        session.set_opacity(-1.0);
        assert_eq!(session.watermark().opacity, 0.0);
    }

    #[test]
    fn test_drag_requires_custom_anchor() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_anchor_mode(AnchorMode::Center);

        let rect = CanvasRect::new(0.0, 0.0, 200.0, 100.0);
        let started = session.pointer_down(
            Point2D::new(100.0, 50.0),
            &rect,
            PointerKind::Mouse,
            &metrics(),
        );
        assert!(!started);
    }

    #[test]
    fn test_full_drag_cycle_clamps_position() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_anchor_mode(AnchorMode::Custom);

        let rect = CanvasRect::new(0.0, 0.0, 200.0, 100.0);
        let m = metrics();

        // Watermark starts centered at (100, 50); press right on it.
        assert!(session.pointer_down(Point2D::new(100.0, 50.0), &rect, PointerKind::Mouse, &m));
        assert_eq!(session.drag_state(), DragState::Dragging);

        // Drag far out of bounds; stored position clamps to (30, 10).
        assert!(session.pointer_move(Point2D::new(-50.0, -50.0), &rect, &m));
        assert_eq!(
            session.watermark().custom_position,
            Point2D::new(30.0, 10.0)
        );

        assert!(session.pointer_up());
        assert_eq!(session.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_maps_through_canvas_rect() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_anchor_mode(AnchorMode::Custom);

        // Canvas displayed at half resolution, offset by (10, 10).
        let rect = CanvasRect::new(10.0, 10.0, 100.0, 50.0);
        let m = metrics();

        // Screen (60, 35) -> image (100, 50): dead center hit.
        assert!(session.pointer_down(Point2D::new(60.0, 35.0), &rect, PointerKind::Mouse, &m));
        assert!(session.pointer_move(Point2D::new(35.0, 22.5), &rect, &m));
        assert_eq!(
            session.watermark().custom_position,
            Point2D::new(50.0, 25.0)
        );
    }

    #[test]
    fn test_switching_anchor_mode_cancels_drag() {
        let mut session = EditorSession::new();
        session.set_image(test_image(200, 100));
        session.set_anchor_mode(AnchorMode::Custom);

        let rect = CanvasRect::new(0.0, 0.0, 200.0, 100.0);
        let m = metrics();
        assert!(session.pointer_down(Point2D::new(100.0, 50.0), &rect, PointerKind::Mouse, &m));

        session.set_anchor_mode(AnchorMode::Center);
        assert_eq!(session.drag_state(), DragState::Idle);
    }
}
