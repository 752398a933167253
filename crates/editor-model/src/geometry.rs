//! Geometry primitives shared between the model and the composition core.
//!
//! Points are in image-logical pixels unless stated otherwise.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The on-screen bounding rectangle of the preview canvas, in CSS pixels.
///
/// This is what the browser reports via `getBoundingClientRect`; pointer
/// events arrive in the same coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    /// Left edge in screen coordinates.
    pub left: f64,
    /// Top edge in screen coordinates.
    pub top: f64,
    /// Rendered width in CSS pixels.
    pub width: f64,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// An axis-aligned bounding box, used for rotation-ignoring hit tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Box centered at `center` extending `half_w`/`half_h` per axis.
    pub fn centered(center: Point2D, half_w: f64, half_h: f64) -> Self {
        Self {
            min_x: center.x - half_w,
            min_y: center.y - half_h,
            max_x: center.x + half_w,
            max_y: center.y + half_h,
        }
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains_edges() {
        let bb = Aabb::centered(Point2D::new(10.0, 10.0), 5.0, 2.0);
        assert!(bb.contains(Point2D::new(5.0, 10.0)));
        assert!(bb.contains(Point2D::new(15.0, 12.0)));
        assert!(!bb.contains(Point2D::new(15.1, 10.0)));
        assert!(!bb.contains(Point2D::new(10.0, 12.1)));
    }
}
