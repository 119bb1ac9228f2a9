//! SinWave Core
//!
//! Foundational types shared by the SinWave crates:
//!
//! - **Geometry**: points, sizes, rects and 2D affine transforms
//! - **Color**: RGBA colors with hex parsing
//! - **Draw Context**: vector paths, brushes and the drawing surface trait
//! - **Redraw Requests**: dirty flags that coalesce repaint requests
//!
//! # Example
//!
//! ```
//! use sinwave_core::Path;
//!
//! let path = Path::new()
//!     .move_to(0.0, 0.0)
//!     .quad_to(100.0, 75.0, 200.0, 25.0);
//!
//! assert_eq!(path.bounds().size.width, 200.0);
//! assert_eq!(path.to_svg_data(), "M0 0 Q100 75 200 25");
//! ```

pub mod color;
pub mod dirty;
pub mod draw;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use dirty::{dirty_flag, DirtyFlag, RedrawRequest};
pub use draw::{
    Brush, DrawCommand, DrawContext, LineCap, Path, PathCommand, RecordingContext, RenderHints,
    Stroke,
};
pub use geometry::{Affine2D, Point, Rect, Size};
