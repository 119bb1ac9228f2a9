//! Demo screens
//!
//! Each screen owns one wave widget and one control. The control's callback
//! is translated into a waviness value and forwarded to the wave.

use sinwave_core::Size;
use sinwave_widget::{DisplayMetrics, MeasureSpec, SinWave, WaveAttributes};
use tracing::trace;

use crate::controls::{AppBar, SeekBar};

/// A screen that can be registered with a [`ScreenNavigator`](crate::ScreenNavigator)
pub trait Screen {
    /// Tag the screen registers under
    fn tag(&self) -> &str;

    /// The screen's wave widget
    fn wave(&self) -> &SinWave;

    /// Mutable access to the wave widget
    fn wave_mut(&mut self) -> &mut SinWave;

    /// Called when the screen becomes visible
    fn on_attach(&mut self) {}

    /// Called when the screen is hidden
    fn on_detach(&mut self) {}

    /// Lay the screen out in a viewport; the wave spans the full width
    fn layout(&mut self, viewport: Size, metrics: DisplayMetrics) -> Size {
        self.wave_mut().measure(
            MeasureSpec::Exactly(viewport.width),
            MeasureSpec::AtMost(viewport.height),
            metrics,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Seek bar screen
// ─────────────────────────────────────────────────────────────────────────────

/// A wave driven by a slider
pub struct SeekbarScreen {
    seek_bar: SeekBar,
    wave: SinWave,
}

impl SeekbarScreen {
    pub const TAG: &'static str = "seekbar";

    pub fn new(attributes: WaveAttributes, max: i32) -> Self {
        Self::with_wave(SinWave::new(attributes), max)
    }

    /// Build the screen around an existing wave
    pub fn with_wave(wave: SinWave, max: i32) -> Self {
        Self {
            seek_bar: SeekBar::new(max),
            wave,
        }
    }

    pub fn seek_bar(&self) -> &SeekBar {
        &self.seek_bar
    }

    /// Slider progress callback
    pub fn on_progress_changed(&mut self, progress: i32, from_user: bool) {
        self.seek_bar.set_progress(progress);
        let ratio = self.seek_bar.ratio();
        trace!(progress, from_user, ratio, "seek bar progress");
        self.wave.update_waviness(ratio);
    }
}

impl Screen for SeekbarScreen {
    fn tag(&self) -> &str {
        Self::TAG
    }

    fn wave(&self) -> &SinWave {
        &self.wave
    }

    fn wave_mut(&mut self) -> &mut SinWave {
        &mut self.wave
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Toolbar screen
// ─────────────────────────────────────────────────────────────────────────────

/// A wave pinned under a collapsing header; the wave flattens as the header
/// collapses
pub struct ToolbarScreen {
    app_bar: AppBar,
    wave: SinWave,
}

impl ToolbarScreen {
    pub const TAG: &'static str = "toolbar";

    pub fn new(attributes: WaveAttributes, header_height: f32, title_height: f32) -> Self {
        Self::with_wave(SinWave::new(attributes), header_height, title_height)
    }

    /// Build the screen around an existing wave
    pub fn with_wave(wave: SinWave, header_height: f32, title_height: f32) -> Self {
        Self {
            app_bar: AppBar::new(header_height, title_height, 0.0),
            wave,
        }
    }

    pub fn app_bar(&self) -> &AppBar {
        &self.app_bar
    }

    /// Header offset callback
    pub fn on_offset_changed(&mut self, offset: i32) {
        self.app_bar.set_offset(offset);
        let expansion = self.app_bar.expansion();
        trace!(offset, expansion, "app bar offset");
        self.wave.update_waviness(expansion);
    }
}

impl Screen for ToolbarScreen {
    fn tag(&self) -> &str {
        Self::TAG
    }

    fn wave(&self) -> &SinWave {
        &self.wave
    }

    fn wave_mut(&mut self) -> &mut SinWave {
        &mut self.wave
    }

    fn layout(&mut self, viewport: Size, metrics: DisplayMetrics) -> Size {
        let size = self.wave.measure(
            MeasureSpec::Exactly(viewport.width),
            MeasureSpec::AtMost(viewport.height),
            metrics,
        );
        // The wave is the pinned content of the header
        self.app_bar.content_height = size.height;
        size
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Demo screen set
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies one of the demo screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Seekbar,
    Toolbar,
}

impl ScreenId {
    pub fn tag(self) -> &'static str {
        match self {
            ScreenId::Seekbar => SeekbarScreen::TAG,
            ScreenId::Toolbar => ToolbarScreen::TAG,
        }
    }
}

/// Any of the demo screens
pub enum DemoScreen {
    Seekbar(SeekbarScreen),
    Toolbar(ToolbarScreen),
}

impl DemoScreen {
    pub fn id(&self) -> ScreenId {
        match self {
            DemoScreen::Seekbar(_) => ScreenId::Seekbar,
            DemoScreen::Toolbar(_) => ScreenId::Toolbar,
        }
    }
}

impl Screen for DemoScreen {
    fn tag(&self) -> &str {
        self.id().tag()
    }

    fn wave(&self) -> &SinWave {
        match self {
            DemoScreen::Seekbar(screen) => screen.wave(),
            DemoScreen::Toolbar(screen) => screen.wave(),
        }
    }

    fn wave_mut(&mut self) -> &mut SinWave {
        match self {
            DemoScreen::Seekbar(screen) => screen.wave_mut(),
            DemoScreen::Toolbar(screen) => screen.wave_mut(),
        }
    }

    fn layout(&mut self, viewport: Size, metrics: DisplayMetrics) -> Size {
        match self {
            DemoScreen::Seekbar(screen) => screen.layout(viewport, metrics),
            DemoScreen::Toolbar(screen) => screen.layout(viewport, metrics),
        }
    }
}
