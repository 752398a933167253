//! Watermark anchor placement.
//!
//! One function decides where the text center goes for both preview and
//! export, so the two paths cannot drift apart.

use imprint_editor_model::geometry::Point2D;
use imprint_editor_model::render_target::RenderTarget;
use imprint_editor_model::watermark::AnchorMode;

use crate::metrics::TextMetrics;

/// Inset from the image edge for the corner anchor modes.
pub fn corner_padding(font_size: f64) -> f64 {
    (font_size * 0.5).max(20.0)
}

/// Compute the watermark center point for the given anchor mode.
///
/// Corner modes offset inward by [`corner_padding`] plus half the text
/// box, so the text's edge (not its center) sits at the padded inset.
/// Custom mode returns the stored position clamped into bounds.
pub fn compute_anchor(
    mode: AnchorMode,
    target: &RenderTarget,
    metrics: &TextMetrics,
    custom_position: Point2D,
) -> Point2D {
    let w = target.width() as f64;
    let h = target.height() as f64;
    let padding = corner_padding(metrics.height);
    let half_w = metrics.half_width();
    let half_h = metrics.half_height();

    match mode {
        AnchorMode::Center => Point2D::new(w / 2.0, h / 2.0),
        AnchorMode::TopLeft => Point2D::new(half_w + padding, half_h + padding),
        AnchorMode::TopRight => Point2D::new(w - half_w - padding, half_h + padding),
        AnchorMode::BottomLeft => Point2D::new(half_w + padding, h - half_h - padding),
        AnchorMode::BottomRight => Point2D::new(w - half_w - padding, h - half_h - padding),
        AnchorMode::Custom => clamp_custom_position(custom_position, target, metrics),
    }
}

/// Clamp a custom position so the text bounding box stays inside the
/// target.
///
/// The bound order is lower-bound-wins: when the text is wider than the
/// target the position pins to the half-extent instead of panicking or
/// inverting, matching `max(lo, min(hi, v))`.
pub fn clamp_custom_position(
    position: Point2D,
    target: &RenderTarget,
    metrics: &TextMetrics,
) -> Point2D {
    let half_w = metrics.half_width();
    let half_h = metrics.half_height();
    let x = position.x.min(target.width() as f64 - half_w).max(half_w);
    let y = position.y.min(target.height() as f64 - half_h).max(half_h);
    Point2D::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_corner_padding_floor() {
        assert_eq!(corner_padding(20.0), 20.0); // 10 < 20 floor
        assert_eq!(corner_padding(48.0), 24.0);
        assert_eq!(corner_padding(100.0), 50.0);
    }

    #[test]
    fn test_center_anchor() {
        let target = RenderTarget::new(100, 50);
        let metrics = TextMetrics::new(40.0, 20.0);
        let anchor = compute_anchor(AnchorMode::Center, &target, &metrics, Point2D::new(0.0, 0.0));
        assert_eq!(anchor, Point2D::new(50.0, 25.0));
    }

    #[test]
    fn test_top_left_scenario() {
        // 200x100 source at 50% -> 100x50 target; font size 20 -> padding 20.
        let target = RenderTarget::from_scale((200, 100), 50);
        assert_eq!((target.width(), target.height()), (100, 50));

        let metrics = TextMetrics::new(60.0, 20.0);
        let anchor =
            compute_anchor(AnchorMode::TopLeft, &target, &metrics, Point2D::new(0.0, 0.0));
        assert_eq!(anchor.x, 60.0 / 2.0 + 20.0);
        assert_eq!(anchor.y, 10.0 + 20.0);
    }

    #[test]
    fn test_bottom_right_insets_from_far_corner() {
        let target = RenderTarget::new(400, 300);
        let metrics = TextMetrics::new(80.0, 40.0);
        let anchor = compute_anchor(
            AnchorMode::BottomRight,
            &target,
            &metrics,
            Point2D::new(0.0, 0.0),
        );
        // padding = max(20, 20) = 20
        assert_eq!(anchor, Point2D::new(400.0 - 40.0 - 20.0, 300.0 - 20.0 - 20.0));
    }

    #[test]
    fn test_fixed_anchors_ignore_custom_position() {
        let target = RenderTarget::new(400, 300);
        let metrics = TextMetrics::new(80.0, 40.0);
        let a = compute_anchor(AnchorMode::Center, &target, &metrics, Point2D::new(1.0, 2.0));
        let b = compute_anchor(
            AnchorMode::Center,
            &target,
            &metrics,
            Point2D::new(390.0, 290.0),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_clamp_negative_drag_scenario() {
        // Drag to (-50, -50) with half-size (30, 10) -> clamped to (30, 10).
        let target = RenderTarget::new(200, 100);
        let metrics = TextMetrics::new(60.0, 20.0);
        let clamped = clamp_custom_position(Point2D::new(-50.0, -50.0), &target, &metrics);
        assert_eq!(clamped, Point2D::new(30.0, 10.0));
    }

    #[test]
    fn test_clamp_lower_bound_wins_when_text_wider_than_target() {
        let target = RenderTarget::new(40, 100);
        let metrics = TextMetrics::new(60.0, 20.0); // half_w 30 > 40 - 30
        let clamped = clamp_custom_position(Point2D::new(35.0, 50.0), &target, &metrics);
        assert_eq!(clamped.x, 30.0);
    }

    proptest! {
        #[test]
        fn prop_clamped_position_stays_in_bounds(
            width in 2u32..4000,
            height in 2u32..4000,
            text_w in 0.0f64..500.0,
            font_size in 1.0f64..200.0,
            x in -5000.0f64..5000.0,
            y in -5000.0f64..5000.0,
        ) {
            let target = RenderTarget::new(width, height);
            let metrics = TextMetrics::new(text_w, font_size);
            let clamped = clamp_custom_position(Point2D::new(x, y), &target, &metrics);

            let half_w = metrics.half_width();
            let half_h = metrics.half_height();
            if half_w * 2.0 <= width as f64 {
                prop_assert!(clamped.x >= half_w - 1e-9);
                prop_assert!(clamped.x <= width as f64 - half_w + 1e-9);
            } else {
                prop_assert_eq!(clamped.x, half_w);
            }
            if half_h * 2.0 <= height as f64 {
                prop_assert!(clamped.y >= half_h - 1e-9);
                prop_assert!(clamped.y <= height as f64 - half_h + 1e-9);
            } else {
                prop_assert_eq!(clamped.y, half_h);
            }
        }

        #[test]
        fn prop_clamp_is_idempotent(
            width in 2u32..4000,
            height in 2u32..4000,
            text_w in 0.0f64..500.0,
            font_size in 1.0f64..200.0,
            x in -5000.0f64..5000.0,
            y in -5000.0f64..5000.0,
        ) {
            let target = RenderTarget::new(width, height);
            let metrics = TextMetrics::new(text_w, font_size);
            let once = clamp_custom_position(Point2D::new(x, y), &target, &metrics);
            let twice = clamp_custom_position(once, &target, &metrics);
            prop_assert_eq!(once, twice);
        }
    }
}
