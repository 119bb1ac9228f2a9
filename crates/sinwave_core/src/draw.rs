//! Vector paths and the surface they are drawn on
//!
//! Widgets describe their shape as a [`Path`] and hand it to a
//! [`DrawContext`] with a [`Brush`]. [`RecordingContext`] keeps the calls as
//! [`DrawCommand`]s so a backend (or a test) can replay them later.
//!
//! # Example
//!
//! ```
//! use sinwave_core::{Color, DrawContext, Path, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(500.0, 100.0));
//! let wave = Path::new().move_to(0.0, 0.0).quad_to(100.0, 75.0, 200.0, 25.0);
//! ctx.fill_path(&wave, Color::RED.into());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

use std::fmt::{self, Write as _};

use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::{Affine2D, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Styles
// ─────────────────────────────────────────────────────────────────────────────

/// How open stroke ends are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    /// Name used by SVG's `stroke-linecap`
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Outline settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: LineCap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::default(),
        }
    }

    pub fn with_cap(self, cap: LineCap) -> Self {
        Self { cap, ..self }
    }
}

/// What a path is filled or outlined with
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    pub fn color(&self) -> Color {
        let Brush::Solid(color) = self;
        *color
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Rasterization hints applied to subsequent draws
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderHints {
    /// Smooth edges
    pub anti_alias: bool,
    /// Dither low-depth targets
    pub dither: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// One step of a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier through one control point
    QuadTo { control: Point, end: Point },
    Close,
}

impl PathCommand {
    /// Points this command touches, control points included
    fn points(&self) -> SmallVec<[Point; 2]> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => smallvec::smallvec![p],
            PathCommand::QuadTo { control, end } => smallvec::smallvec![control, end],
            PathCommand::Close => SmallVec::new(),
        }
    }
}

/// A vector path
///
/// A wave is a move plus three curves, so four commands are kept inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 4]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(self, x: f32, y: f32) -> Self {
        self.with(PathCommand::MoveTo(Point::new(x, y)))
    }

    pub fn line_to(self, x: f32, y: f32) -> Self {
        self.with(PathCommand::LineTo(Point::new(x, y)))
    }

    /// Curve to `(x, y)` pulled towards `(cx, cy)`
    pub fn quad_to(self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.with(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        })
    }

    pub fn close(self) -> Self {
        self.with(PathCommand::Close)
    }

    /// Straight segment between two points
    pub fn line(from: Point, to: Point) -> Self {
        Self::new().move_to(from.x, from.y).line_to(to.x, to.y)
    }

    fn with(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Where the next command would start
    pub fn current_point(&self) -> Option<Point> {
        match self.commands.last()? {
            // Closing returns to the start of the subpath
            PathCommand::Close => Some(self.subpath_start()),
            last => last.points().last().copied(),
        }
    }

    /// Point of the most recent `MoveTo`, or the origin without one
    fn subpath_start(&self) -> Point {
        self.commands
            .iter()
            .rev()
            .find_map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => Some(p),
                _ => None,
            })
            .unwrap_or(Point::ZERO)
    }

    /// Bounding rectangle of all points, control points included
    pub fn bounds(&self) -> Rect {
        let mut points = self.commands.iter().flat_map(PathCommand::points);
        let Some(first) = points.next() else {
            return Rect::ZERO;
        };

        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Rect::from_min_max(min, max)
    }

    /// SVG path data (the `d` attribute)
    pub fn to_svg_data(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

/// Formats as SVG path data, e.g. `M0 0 Q100 75 200 25`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 would print as "-0"
        fn n(v: f32) -> f32 {
            if v == 0.0 {
                0.0
            } else {
                v
            }
        }

        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M{} {}", n(p.x), n(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L{} {}", n(p.x), n(p.y))?,
                PathCommand::QuadTo { control: c, end: e } => {
                    write!(f, "Q{} {} {} {}", n(c.x), n(c.y), n(e.x), n(e.y))?
                }
                PathCommand::Close => f.write_char('Z')?,
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Drawing surface
// ─────────────────────────────────────────────────────────────────────────────

/// Anything a widget can paint onto
pub trait DrawContext {
    /// Apply `transform` on top of the current one until the matching pop
    fn push_transform(&mut self, transform: Affine2D);

    fn pop_transform(&mut self);

    /// Combined transform of everything pushed so far
    fn current_transform(&self) -> Affine2D;

    /// Contexts that rasterize at a fixed quality may ignore hints
    fn set_render_hints(&mut self, _hints: RenderHints) {}

    fn fill_path(&mut self, path: &Path, brush: Brush);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    fn viewport_size(&self) -> Size;
}

/// A recorded [`DrawContext`] call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Affine2D),
    PopTransform,
    SetRenderHints(RenderHints),
    FillPath {
        path: Path,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
}

/// Records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    /// Combined transform per pushed level; empty means identity
    transforms: Vec<Affine2D>,
    viewport: Size,
}

impl RecordingContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand over the recorded commands, leaving the transform state alone
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transforms.clear();
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Affine2D) {
        let combined = self.current_transform().then(&transform);
        self.transforms.push(combined);
        self.commands.push(DrawCommand::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        // Unbalanced pops are recorded but leave the identity in place
        self.transforms.pop();
        self.commands.push(DrawCommand::PopTransform);
    }

    fn current_transform(&self) -> Affine2D {
        self.transforms.last().copied().unwrap_or(Affine2D::IDENTITY)
    }

    fn set_render_hints(&mut self, hints: RenderHints) {
        self.commands.push(DrawCommand::SetRenderHints(hints));
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        let path = path.clone();
        self.commands.push(DrawCommand::FillPath { path, brush });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        let (path, stroke) = (path.clone(), *stroke);
        self.commands
            .push(DrawCommand::StrokePath { path, stroke, brush });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
