//! The demo application
//!
//! `WaveApp` owns the navigator and routes events to the primary screen.
//! It launches on the seek bar screen.

use sinwave_core::{DrawCommand, RedrawRequest, Size};
use sinwave_paint::PaintContext;
use sinwave_widget::{DisplayMetrics, SinWave, WaveAttributes};
use tracing::{debug, info, trace};

use crate::event::{AppEvent, ControlFlow};
use crate::navigation::{
    attach_from, AttachOptions, NavigationHost, NavigationOutcome, ScreenNavigator,
};
use crate::screen::{DemoScreen, Screen, ScreenId, SeekbarScreen, ToolbarScreen};

/// Application configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Attributes every wave is created with
    pub attributes: WaveAttributes,
    /// Display density
    pub metrics: DisplayMetrics,
    /// Initial window size
    pub viewport: Size,
    /// Maximum slider progress
    pub seekbar_max: i32,
    /// Height of the collapsing header
    pub header_height: f32,
    /// Height of the pinned title bar
    pub title_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            attributes: WaveAttributes::default(),
            metrics: DisplayMetrics::default(),
            viewport: Size::new(360.0, 640.0),
            seekbar_max: 100,
            header_height: 200.0,
            title_height: 56.0,
        }
    }
}

/// The demo application
pub struct WaveApp {
    config: AppConfig,
    navigator: ScreenNavigator<DemoScreen>,
    viewport: Size,
    /// Shared by the waves of every screen
    redraw: RedrawRequest,
    last_frame: Vec<DrawCommand>,
    frames: u64,
}

impl WaveApp {
    /// Create the app and show the launch screen
    pub fn new(config: AppConfig) -> Self {
        let viewport = config.viewport;
        let mut app = Self {
            config,
            navigator: ScreenNavigator::new(),
            viewport,
            redraw: RedrawRequest::new(),
            last_frame: Vec::new(),
            frames: 0,
        };
        app.navigate(ScreenId::Seekbar, false);
        info!(?viewport, "wave app started");
        app
    }

    /// Handle one event
    pub fn handle_event(&mut self, event: AppEvent) -> ControlFlow {
        trace!(?event, "handle_event");
        match event {
            AppEvent::Resized { width, height } => {
                self.viewport = Size::new(width, height).non_negative();
                self.layout_primary();
            }
            AppEvent::SeekBarProgress {
                progress,
                from_user,
            } => match self.navigator.primary_mut() {
                Some(DemoScreen::Seekbar(screen)) => {
                    screen.on_progress_changed(progress, from_user)
                }
                _ => debug!(progress, "no seek bar on screen; ignoring progress"),
            },
            AppEvent::AppBarOffset { offset } => match self.navigator.primary_mut() {
                Some(DemoScreen::Toolbar(screen)) => screen.on_offset_changed(offset),
                _ => debug!(offset, "no app bar on screen; ignoring offset"),
            },
            AppEvent::Navigate {
                screen,
                add_to_back_stack,
            } => self.navigate(screen, add_to_back_stack),
            AppEvent::Back => {
                if !self.navigator.pop_back_stack() {
                    info!("back stack empty; exiting");
                    return ControlFlow::Exit;
                }
                self.layout_primary();
            }
            AppEvent::Frame => {
                self.paint_frame();
            }
            AppEvent::CloseRequested => return ControlFlow::Exit,
        }
        ControlFlow::Continue
    }

    /// Show a screen, creating it on first use
    pub fn navigate(&mut self, screen: ScreenId, add_to_back_stack: bool) {
        let config = self.config.clone();
        let redraw = self.redraw.clone();
        let make = move || {
            let wave = SinWave::with_redraw(config.attributes, redraw);
            match screen {
                ScreenId::Seekbar => {
                    DemoScreen::Seekbar(SeekbarScreen::with_wave(wave, config.seekbar_max))
                }
                ScreenId::Toolbar => DemoScreen::Toolbar(ToolbarScreen::with_wave(
                    wave,
                    config.header_height,
                    config.title_height,
                )),
            }
        };

        let mut options = AttachOptions::default();
        if add_to_back_stack {
            options = options.with_back_stack();
        }

        if let Some(NavigationOutcome::Committed { .. }) =
            attach_from(self, Some(screen.tag()), make, options)
        {
            self.layout_primary();
        }
    }

    /// Paint the primary screen if any wave asked for a redraw
    ///
    /// Returns whether a frame was painted.
    pub fn paint_frame(&mut self) -> bool {
        let viewport = self.viewport;
        let Some(screen) = self.navigator.primary() else {
            return false;
        };
        if !self.redraw.take() {
            return false;
        }
        let wave = screen.wave();

        let mut canvas = PaintContext::from_size(viewport);
        wave.draw(&mut canvas);
        self.last_frame = canvas.take_commands();
        self.frames += 1;
        trace!(frame = self.frames, commands = self.last_frame.len(), "painted frame");
        true
    }

    /// Commands of the most recently painted frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Whether a wave has requested a redraw since the last frame
    pub fn needs_redraw(&self) -> bool {
        self.redraw.is_pending()
    }

    /// Number of frames painted so far
    pub fn frames_painted(&self) -> u64 {
        self.frames
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn primary_screen(&self) -> Option<&DemoScreen> {
        self.navigator.primary()
    }

    /// The screen registry
    pub fn screens(&self) -> &ScreenNavigator<DemoScreen> {
        &self.navigator
    }

    fn layout_primary(&mut self) {
        let viewport = self.viewport;
        let metrics = self.config.metrics;
        if let Some(screen) = self.navigator.primary_mut() {
            let size = screen.layout(viewport, metrics);
            debug!(tag = screen.tag(), ?size, "laid out screen");
        }
    }
}

impl Default for WaveApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl NavigationHost<DemoScreen> for WaveApp {
    fn navigator(&mut self) -> Option<&mut ScreenNavigator<DemoScreen>> {
        Some(&mut self.navigator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launches_on_seekbar() {
        let app = WaveApp::default();
        let screen = app.primary_screen().unwrap();

        assert_eq!(screen.id(), ScreenId::Seekbar);
        assert_eq!(screen.wave().state().size(), Size::new(360.0, 24.0));
    }

    #[test]
    fn test_frame_paints_only_when_dirty() {
        let mut app = WaveApp::default();

        assert_eq!(app.handle_event(AppEvent::Frame), ControlFlow::Continue);
        assert_eq!(app.frames_painted(), 1);
        assert!(!app.last_frame().is_empty());

        app.handle_event(AppEvent::Frame);
        assert_eq!(app.frames_painted(), 1);

        app.handle_event(AppEvent::SeekBarProgress {
            progress: 50,
            from_user: true,
        });
        app.handle_event(AppEvent::Frame);
        assert_eq!(app.frames_painted(), 2);
    }

    #[test]
    fn test_waves_share_app_redraw_flag() {
        let mut app = WaveApp::default();
        app.handle_event(AppEvent::Frame);
        assert!(!app.needs_redraw());

        app.handle_event(AppEvent::Navigate {
            screen: ScreenId::Toolbar,
            add_to_back_stack: true,
        });
        app.handle_event(AppEvent::Frame);
        assert!(!app.needs_redraw());

        // Any screen's wave raises the same flag
        let screen = app.primary_screen().unwrap();
        screen.wave().invalidate();
        assert!(app.needs_redraw());
        assert!(screen.wave().needs_redraw());

        let before = app.frames_painted();
        app.handle_event(AppEvent::Frame);
        assert_eq!(app.frames_painted(), before + 1);
        assert!(!app.needs_redraw());

        let seekbar = app.screens().get(SeekbarScreen::TAG).unwrap();
        seekbar.wave().invalidate();
        assert!(app.needs_redraw());
    }

    #[test]
    fn test_resize_reaches_wave() {
        let mut app = WaveApp::default();
        app.handle_event(AppEvent::Resized {
            width: 500.0,
            height: 100.0,
        });

        let wave = app.primary_screen().unwrap().wave();
        assert_eq!(wave.state().size(), Size::new(500.0, 24.0));
    }

    #[test]
    fn test_events_for_other_screen_ignored() {
        let mut app = WaveApp::default();
        app.handle_event(AppEvent::AppBarOffset { offset: -50 });

        assert_eq!(app.primary_screen().unwrap().wave().waviness(), 1.0);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut app = WaveApp::default();
        app.handle_event(AppEvent::Navigate {
            screen: ScreenId::Toolbar,
            add_to_back_stack: true,
        });
        assert_eq!(app.primary_screen().unwrap().id(), ScreenId::Toolbar);

        // 200 - 56 - 24 = 120 px of scroll
        app.handle_event(AppEvent::AppBarOffset { offset: -30 });
        assert_eq!(app.primary_screen().unwrap().wave().waviness(), 0.75);

        assert_eq!(app.handle_event(AppEvent::Back), ControlFlow::Continue);
        assert_eq!(app.primary_screen().unwrap().id(), ScreenId::Seekbar);

        assert_eq!(app.handle_event(AppEvent::Back), ControlFlow::Exit);
    }

    #[test]
    fn test_close_requested() {
        let mut app = WaveApp::default();
        assert_eq!(app.handle_event(AppEvent::CloseRequested), ControlFlow::Exit);
    }
}
