//! Imprint Render Engine
//!
//! Turns a session's state into pixels and files:
//!
//! 1. **Sprite** ([`sprite`]): rasterize the watermark text with its
//!    shadow, affordance, rotation, and opacity into a transparent layer.
//! 2. **Compositor** ([`compositor`]): resize the source to the target
//!    and overlay the sprite at its anchor. Preview and export share this
//!    path; only the surface scale and decorations differ.
//! 3. **Export** ([`export`]): encode the frame as PNG or JPEG and write
//!    it under a timestamped filename.

pub mod compositor;
pub mod export;
pub mod sprite;

pub use compositor::{
    render_export, render_frame, render_preview, surface_dimensions, RenderPass,
};
pub use export::{
    encode_frame, export_filename, export_frame, write_frame, ExportFormat, JPEG_QUALITY,
};
pub use sprite::render_sprite;
