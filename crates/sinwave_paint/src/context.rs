//! Paint context
//!
//! [`PaintContext`] sits in front of any [`DrawContext`] and turns
//! `draw_path(path, paint)` calls into brush and render-hint calls on it.
//! By default it records into a [`RecordingContext`].

use sinwave_core::{Affine2D, DrawCommand, DrawContext, Path, RecordingContext, RenderHints, Size};
use tracing::trace;

use crate::paint::{Paint, PaintStyle};

/// Canvas that widgets draw onto with a [`Paint`]
#[derive(Debug)]
pub struct PaintContext<C = RecordingContext> {
    target: C,
    /// Hints last sent to the target
    hints: RenderHints,
}

impl PaintContext {
    /// Recording canvas of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_size(Size::new(width, height))
    }

    pub fn from_size(size: Size) -> Self {
        Self::with_target(RecordingContext::new(size))
    }

    pub fn commands(&self) -> &[DrawCommand] {
        self.target.commands()
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.target.take_commands()
    }
}

impl<C: DrawContext> PaintContext<C> {
    /// Paint onto an existing context
    pub fn with_target(target: C) -> Self {
        Self {
            target,
            hints: RenderHints::default(),
        }
    }

    /// Draw a path with a paint
    ///
    /// Render hints go to the target only when they differ from the previous
    /// draw's.
    pub fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let hints = paint.hints();
        if hints != self.hints {
            self.target.set_render_hints(hints);
            self.hints = hints;
        }

        trace!(commands = path.commands().len(), style = ?paint.style, "draw_path");
        match &paint.style {
            PaintStyle::Fill => self.target.fill_path(path, paint.brush()),
            PaintStyle::Stroke(stroke) => self.target.stroke_path(path, stroke, paint.brush()),
        }
    }

    /// Shift subsequent draws until [`restore`](Self::restore)
    pub fn translate(&mut self, x: f32, y: f32) {
        self.target.push_transform(Affine2D::translation(x, y));
    }

    /// Scale subsequent draws until [`restore`](Self::restore)
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.target.push_transform(Affine2D::scale(sx, sy));
    }

    /// Undo the last `translate` or `scale`
    pub fn restore(&mut self) {
        self.target.pop_transform();
    }

    pub fn size(&self) -> Size {
        self.target.viewport_size()
    }

    pub fn target(&self) -> &C {
        &self.target
    }

    pub fn into_target(self) -> C {
        self.target
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::from_size(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinwave_core::{Brush, Color, Point, Stroke};

    fn line() -> Path {
        Path::line(Point::ZERO, Point::new(100.0, 0.0))
    }

    #[test]
    fn test_size() {
        let ctx = PaintContext::new(500.0, 100.0);
        assert_eq!(ctx.size(), Size::new(500.0, 100.0));
        let empty: PaintContext = PaintContext::default();
        assert_eq!(empty.size(), Size::ZERO);
    }

    #[test]
    fn test_smooth_fill() {
        let mut ctx = PaintContext::new(500.0, 100.0);
        ctx.draw_path(&line(), &Paint::smooth(Color::RED));

        match ctx.commands() {
            [DrawCommand::SetRenderHints(hints), DrawCommand::FillPath { brush, .. }] => {
                assert!(hints.anti_alias && hints.dither);
                assert_eq!(*brush, Brush::Solid(Color::RED));
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn test_hints_sent_on_change_only() {
        let mut ctx = PaintContext::new(500.0, 100.0);
        let smooth = Paint::smooth(Color::BLUE);

        ctx.draw_path(&line(), &smooth);
        ctx.draw_path(&line(), &smooth);
        ctx.draw_path(&line(), &Paint::new(Color::BLUE));

        let hint_count = ctx
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::SetRenderHints(_)))
            .count();
        assert_eq!(hint_count, 2);
    }

    #[test]
    fn test_stroke() {
        let mut ctx = PaintContext::new(500.0, 100.0);
        let paint = Paint::new(Color::GREEN).style(PaintStyle::Stroke(Stroke::new(3.0)));
        ctx.draw_path(&line(), &paint);

        assert!(matches!(
            ctx.commands(),
            [DrawCommand::StrokePath { stroke, .. }] if stroke.width == 3.0
        ));
    }

    #[test]
    fn test_translate_and_restore() {
        let mut ctx = PaintContext::new(500.0, 100.0);
        ctx.translate(10.0, 20.0);
        assert_eq!(
            ctx.target().current_transform(),
            Affine2D::translation(10.0, 20.0)
        );
        ctx.restore();

        let recording = ctx.into_target();
        assert_eq!(recording.current_transform(), Affine2D::IDENTITY);
        assert_eq!(recording.commands().len(), 2);
    }
}
