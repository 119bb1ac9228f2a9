//! Paint configuration
//!
//! A [`Paint`] bundles everything a draw call needs besides geometry:
//! color, fill or stroke style, and rasterization flags.

use sinwave_core::{Brush, Color, RenderHints, Stroke};

/// How a path is painted
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PaintStyle {
    /// Fill the interior of the path
    #[default]
    Fill,
    /// Stroke the outline of the path
    Stroke(Stroke),
}

/// Paint settings for a draw call
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    /// Solid color
    pub color: Color,
    /// Fill or stroke
    pub style: PaintStyle,
    /// Smooth edges
    pub anti_alias: bool,
    /// Dither when rasterizing
    pub dither: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            anti_alias: false,
            dither: false,
        }
    }
}

impl Paint {
    /// Create a fill paint with the given color
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Anti-aliased, dithered, solid fill (the paint smooth curves use)
    pub fn smooth(color: Color) -> Self {
        Self::new(color).anti_alias(true).dither(true)
    }

    /// Set the color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the paint style
    pub fn style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable or disable anti-aliasing
    pub fn anti_alias(mut self, enabled: bool) -> Self {
        self.anti_alias = enabled;
        self
    }

    /// Enable or disable dithering
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// Brush for this paint's color
    pub fn brush(&self) -> Brush {
        Brush::Solid(self.color)
    }

    /// Rasterization hints for this paint
    pub fn hints(&self) -> RenderHints {
        RenderHints {
            anti_alias: self.anti_alias,
            dither: self.dither,
        }
    }
}
