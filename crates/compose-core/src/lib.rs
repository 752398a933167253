//! Imprint Composition Core
//!
//! The interaction and placement logic shared by preview and export:
//! - **Fonts & metrics:** advance-width text measurement
//! - **Anchors:** corner/center insets and custom-position clamping
//! - **Mapper:** screen-to-image coordinate conversion
//! - **Drag:** the Idle/Dragging pointer state machine
//! - **Session:** the explicit editor state struct that event handlers mutate
//!
//! Everything here is deterministic computation over plain data; the only
//! I/O in this crate is loading a font file into the [`FontStore`].

pub mod anchor;
pub mod drag;
pub mod fonts;
pub mod mapper;
pub mod metrics;
pub mod session;

pub use anchor::{clamp_custom_position, compute_anchor, corner_padding};
pub use drag::{DragController, DragState, PointerKind};
pub use fonts::FontStore;
pub use mapper::map_to_image_space;
pub use metrics::{measure_text, TextMetrics};
pub use session::EditorSession;
