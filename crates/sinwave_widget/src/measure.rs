//! Size negotiation
//!
//! A parent lays out a widget by handing it one [`MeasureSpec`] per axis.

/// Sizing constraint for one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// The parent dictates the exact size
    Exactly(f32),
    /// The widget may be at most this large
    AtMost(f32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Resolve the size for a widget that would like to be `desired`
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Display density information
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Physical pixels per density-independent pixel
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl DisplayMetrics {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    /// Convert density-independent pixels to physical pixels
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}
