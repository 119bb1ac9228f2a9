//! SinWave Paint/Canvas API
//!
//! A small 2D drawing API for custom widgets, similar to an HTML
//! canvas. Paths are drawn with a [`Paint`] describing color, style and
//! rasterization flags; everything is recorded as
//! [`DrawCommand`](sinwave_core::DrawCommand)s for the renderer.
//!
//! # Example
//!
//! ```
//! use sinwave_paint::{Color, Paint, PaintContext, Path};
//!
//! let mut ctx = PaintContext::new(500.0, 100.0);
//! let path = Path::new().move_to(0.0, 0.0).quad_to(100.0, 75.0, 200.0, 25.0);
//! ctx.draw_path(&path, &Paint::smooth(Color::RED));
//!
//! let commands = ctx.take_commands();
//! assert!(!commands.is_empty());
//! ```

pub mod context;
pub mod paint;
pub mod path;

pub use sinwave_core::{
    Brush, Color, DrawCommand, DrawContext, LineCap, Path, PathCommand, Point, Rect,
    RecordingContext, RenderHints, Size, Stroke,
};

pub use context::PaintContext;
pub use paint::{Paint, PaintStyle};
pub use path::PathBuilder;
