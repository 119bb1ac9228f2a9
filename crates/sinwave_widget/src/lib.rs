//! SinWave Widget
//!
//! A custom widget drawing a smooth horizontal wave. The whole widget state
//! is one waviness value in `[0, 1]` plus the measured size; from those the
//! widget derives a path of three quadratic Bézier segments.
//!
//! - [`SinWave`]: the widget (waviness updates, resize, measure, draw)
//! - [`WaveState`]: the clamped state record
//! - [`WaveAttributes`]: construction-time style attributes
//! - [`curve`]: the path geometry as pure functions
//! - [`MeasureSpec`]: parent sizing constraints

pub mod attributes;
pub mod curve;
pub mod measure;
pub mod sinwave;
pub mod state;

pub use attributes::WaveAttributes;
pub use curve::QuadSegment;
pub use measure::{DisplayMetrics, MeasureSpec};
pub use sinwave::{SinWave, DESIRED_WIDTH_PX, MIN_HEIGHT_DP};
pub use state::{clamp_waviness, WaveState, DEFAULT_WAVINESS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::attributes::WaveAttributes;
    pub use crate::measure::{DisplayMetrics, MeasureSpec};
    pub use crate::sinwave::SinWave;
    pub use crate::state::WaveState;
}
