//! SinWave widget
//!
//! A horizontal wave whose amplitude follows a single waviness value. Hosts
//! forward a normalized scalar (a slider position, a scroll ratio) through
//! [`SinWave::update_waviness`]; the widget rebuilds its path and asks for a
//! redraw.
//!
//! # Example
//!
//! ```
//! use sinwave_paint::PaintContext;
//! use sinwave_widget::{SinWave, WaveAttributes};
//!
//! let mut wave = SinWave::new(WaveAttributes::default());
//! wave.on_resize(500.0, 100.0);
//! wave.update_waviness(0.5);
//!
//! let mut canvas = PaintContext::new(500.0, 100.0);
//! if wave.take_redraw() {
//!     wave.draw(&mut canvas);
//! }
//! assert!(!canvas.commands().is_empty());
//! ```

use sinwave_core::{Color, DrawContext, Path, RedrawRequest, Size};
use sinwave_paint::{Paint, PaintContext, PathBuilder};
use tracing::{debug, trace};

use crate::attributes::WaveAttributes;
use crate::curve;
use crate::measure::{DisplayMetrics, MeasureSpec};
use crate::state::WaveState;

/// Width the widget asks for when unconstrained, in pixels
pub const DESIRED_WIDTH_PX: f32 = 100.0;

/// Height the widget asks for when unconstrained, in dp
pub const MIN_HEIGHT_DP: f32 = 24.0;

/// The wave widget
pub struct SinWave {
    state: WaveState,
    paint: Paint,
    builder: PathBuilder,
    path: Path,
    redraw: RedrawRequest,
}

impl SinWave {
    /// Create a wave from its style attributes
    pub fn new(attributes: WaveAttributes) -> Self {
        Self::with_redraw(attributes, RedrawRequest::new())
    }

    /// Create a wave that reports redraws through `redraw`
    pub fn with_redraw(attributes: WaveAttributes, redraw: RedrawRequest) -> Self {
        let mut wave = Self {
            state: WaveState::new(attributes.waviness),
            paint: Paint::smooth(attributes.wave_color),
            builder: PathBuilder::new(),
            path: Path::new(),
            redraw,
        };
        wave.recompute_path();
        wave
    }

    /// Set the waviness (clamped into `[0, 1]`), rebuild the path and
    /// request a redraw
    pub fn set_waviness(&mut self, waviness: f32) {
        self.state.set_waviness(waviness);
        self.recompute_path();
        self.invalidate();
    }

    /// Entry point for hosts: `progress` is expected in `[0, 1]` but is
    /// clamped regardless
    pub fn update_waviness(&mut self, progress: f32) {
        trace!(progress, "update_waviness");
        self.set_waviness(progress);
    }

    /// The widget was resized; rebuild the path with the retained waviness
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.state.set_size(width, height);
        self.recompute_path();
        self.invalidate();
    }

    /// Resolve the widget size from its parent's constraints and resize
    pub fn measure(
        &mut self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        metrics: DisplayMetrics,
    ) -> Size {
        let width = width_spec.resolve(DESIRED_WIDTH_PX);
        // Whole pixels, truncated
        let height = height_spec.resolve(metrics.dp_to_px(MIN_HEIGHT_DP).trunc());
        debug!(?width_spec, ?height_spec, width, height, "measured wave");

        self.on_resize(width, height);
        self.state.size()
    }

    /// Paint the wave onto a canvas
    pub fn draw<C: DrawContext>(&self, canvas: &mut PaintContext<C>) {
        canvas.draw_path(&self.path, &self.paint);
    }

    /// Request a redraw from the host
    pub fn invalidate(&self) {
        self.redraw.request();
    }

    /// Clear a pending redraw request, returning whether one was pending
    pub fn take_redraw(&self) -> bool {
        self.redraw.take()
    }

    /// Whether a redraw is pending
    pub fn needs_redraw(&self) -> bool {
        self.redraw.is_pending()
    }

    pub fn state(&self) -> &WaveState {
        &self.state
    }

    pub fn waviness(&self) -> f32 {
        self.state.waviness()
    }

    /// The current wave path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn wave_color(&self) -> Color {
        self.paint.color
    }

    /// Change the wave color and request a redraw
    pub fn set_wave_color(&mut self, color: Color) {
        self.paint.color = color;
        self.invalidate();
    }

    fn recompute_path(&mut self) {
        self.path = curve::build_path(&self.state, &mut self.builder);
        trace!(
            width = self.state.width(),
            height = self.state.height(),
            waviness = self.state.waviness(),
            "recomputed wave path"
        );
    }
}

impl Default for SinWave {
    fn default() -> Self {
        Self::new(WaveAttributes::default())
    }
}
