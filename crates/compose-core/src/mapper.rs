//! Screen-to-image coordinate mapping.
//!
//! The preview canvas is displayed at a CSS size that usually differs from
//! its logical resolution (responsive layout plus device pixel ratio).
//! Pointer events arrive in screen coordinates; placement math runs in
//! image-logical coordinates. One scale factor per axis covers both
//! effects.

use imprint_editor_model::geometry::{CanvasRect, Point2D};
use imprint_editor_model::render_target::RenderTarget;

/// Convert a screen-space pointer position into image-logical coordinates.
pub fn map_to_image_space(
    screen: Point2D,
    canvas_rect: &CanvasRect,
    target: &RenderTarget,
) -> Point2D {
    let scale_x = target.width() as f64 / canvas_rect.width.max(f64::EPSILON);
    let scale_y = target.height() as f64 / canvas_rect.height.max(f64::EPSILON);

    Point2D::new(
        (screen.x - canvas_rect.left) * scale_x,
        (screen.y - canvas_rect.top) * scale_y,
    )
}
