//! Incremental path building
//!
//! [`PathBuilder`] is the in-place counterpart of the chainable [`Path`]
//! methods. A widget keeps one around and rebuilds into it on every change.

pub use sinwave_core::{Path, PathCommand, Point};

/// Reusable, cursor-tracking path builder
#[derive(Debug, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all commands and return the cursor to the origin
    pub fn reset(&mut self) -> &mut Self {
        self.path = Path::new();
        self
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.apply(|path| path.move_to(x, y))
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.apply(|path| path.line_to(x, y))
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.apply(|path| path.quad_to(cx, cy, x, y))
    }

    pub fn close(&mut self) -> &mut Self {
        self.apply(Path::close)
    }

    fn apply(&mut self, f: impl FnOnce(Path) -> Path) -> &mut Self {
        self.path = f(std::mem::take(&mut self.path));
        self
    }

    /// Snapshot of the commands built so far
    pub fn build(&self) -> Path {
        self.path.clone()
    }

    /// Where the next command starts: the last end point, the subpath start
    /// after `close`, or the origin when empty
    pub fn current_position(&self) -> Point {
        self.path.current_point().unwrap_or(Point::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_tracks_end_points() {
        let mut builder = PathBuilder::new();
        builder.move_to(0.0, 0.0).quad_to(100.0, 75.0, 200.0, 25.0);
        assert_eq!(builder.current_position(), Point::new(200.0, 25.0));
        assert_eq!(builder.build().commands().len(), 2);
    }

    #[test]
    fn test_close_returns_cursor_to_subpath_start() {
        let mut builder = PathBuilder::new();
        builder
            .move_to(10.0, 20.0)
            .line_to(50.0, 20.0)
            .quad_to(60.0, 40.0, 30.0, 60.0)
            .close();
        assert_eq!(builder.current_position(), Point::new(10.0, 20.0));

        builder.line_to(0.0, 0.0);
        assert_eq!(builder.current_position(), Point::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut builder = PathBuilder::new();
        builder.move_to(5.0, 5.0).line_to(10.0, 10.0).close();
        builder.reset();

        assert!(builder.build().is_empty());
        assert_eq!(builder.current_position(), Point::ZERO);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut builder = PathBuilder::new();
        builder.move_to(0.0, 0.0);
        let first = builder.build();
        builder.line_to(1.0, 1.0);

        assert_eq!(first.commands().len(), 1);
        assert_eq!(builder.build().commands().len(), 2);
    }
}
