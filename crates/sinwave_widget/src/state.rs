//! Wave state
//!
//! The three numbers that fully determine the rendered curve.

use sinwave_core::Size;

/// Waviness used when no attribute overrides it
pub const DEFAULT_WAVINESS: f32 = 1.0;

/// Clamp a waviness value into `[0, 1]`. NaN maps to 0 (a flat line).
pub fn clamp_waviness(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Dimensions and waviness of a wave widget
///
/// Every write goes through [`clamp_waviness`] or [`Size::non_negative`], so
/// the stored values are always in range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveState {
    size: Size,
    waviness: f32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new(DEFAULT_WAVINESS)
    }
}

impl WaveState {
    /// Zero-sized state with the given waviness
    pub fn new(waviness: f32) -> Self {
        Self {
            size: Size::ZERO,
            waviness: clamp_waviness(waviness),
        }
    }

    pub fn waviness(&self) -> f32 {
        self.waviness
    }

    pub fn set_waviness(&mut self, waviness: f32) {
        self.waviness = clamp_waviness(waviness);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height).non_negative();
    }
}
