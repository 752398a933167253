//! Pointer drag state machine for repositioning the watermark.
//!
//! Two states, three transitions:
//!
//! ```text
//! Idle --pointer-down inside watermark AABB--> Dragging
//! Dragging --pointer-move--> Dragging (position update + redraw)
//! Dragging --pointer-up/touch-end--> Idle
//! ```
//!
//! Hit-testing uses the unrotated bounding box; rotation is deliberately
//! ignored so picking stays cheap and predictable.

use imprint_editor_model::geometry::{Aabb, Point2D};

use crate::metrics::TextMetrics;

/// Pointer device class. Touch gets a larger hit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// Extra slack around the text box accepted as a hit.
    pub fn hit_padding(&self) -> f64 {
        match self {
            PointerKind::Mouse => 20.0,
            PointerKind::Touch => 30.0,
        }
    }
}

/// Whether a pointer is currently captured for repositioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// The drag interaction controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Pointer pressed at `point` (image space) while the watermark is
    /// centered at `center`. Returns true when the drag engaged.
    pub fn pointer_down(
        &mut self,
        point: Point2D,
        center: Point2D,
        metrics: &TextMetrics,
        kind: PointerKind,
    ) -> bool {
        if self.state == DragState::Dragging {
            return false;
        }

        let padding = kind.hit_padding();
        let hit_box = Aabb::centered(
            center,
            metrics.half_width() + padding,
            metrics.half_height() + padding,
        );

        if hit_box.contains(point) {
            self.state = DragState::Dragging;
            tracing::trace!(?point, ?kind, "Drag engaged");
            true
        } else {
            false
        }
    }

    /// Pointer moved to `point` (image space). Returns the new raw
    /// watermark position when a drag is active; the caller clamps and
    /// stores it, then re-renders.
    pub fn pointer_move(&mut self, point: Point2D) -> Option<Point2D> {
        match self.state {
            DragState::Dragging => Some(point),
            DragState::Idle => None,
        }
    }

    /// Pointer released or touch ended. Returns true when a drag was
    /// active.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.state == DragState::Dragging;
        self.state = DragState::Idle;
        if was_dragging {
            tracing::trace!("Drag released");
        }
        was_dragging
    }
}
