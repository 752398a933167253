//! Imprint Editor Model
//!
//! Defines the core data contracts for an Imprint editing session:
//! - **ImageSource:** the decoded bitmap and its natural dimensions
//! - **RenderTarget:** requested output dimensions with aspect-lock rules
//! - **WatermarkConfig:** text, styling, and anchor placement
//! - **Geometry:** points and rectangles shared by the composition core
//!
//! All watermark coordinates are image-logical pixels relative to the
//! render target, so they survive DPR and CSS-size changes between
//! preview and export.

pub mod geometry;
pub mod image_source;
pub mod render_target;
pub mod watermark;

pub use geometry::*;
pub use image_source::*;
pub use render_target::*;
pub use watermark::*;
