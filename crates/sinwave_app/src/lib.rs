//! SinWave Demo Application
//!
//! Two screens driving the wave widget, plus the plumbing between them:
//!
//! - **Seek bar screen**: waviness follows a slider (`progress / max`)
//! - **Toolbar screen**: waviness follows a collapsing header, flattening
//!   as the header collapses
//! - **Navigation**: a tag-keyed screen registry with one primary screen and
//!   an optional back stack
//! - **App**: an event handler that routes input to the primary screen and
//!   paints frames on demand
//!
//! # Example
//!
//! ```
//! use sinwave_app::{AppConfig, AppEvent, ControlFlow, WaveApp};
//!
//! let mut app = WaveApp::new(AppConfig::default());
//! app.handle_event(AppEvent::SeekBarProgress { progress: 25, from_user: true });
//! assert_eq!(app.handle_event(AppEvent::Frame), ControlFlow::Continue);
//! assert_eq!(app.primary_screen().map(|s| s.id()), Some(sinwave_app::ScreenId::Seekbar));
//! ```

pub mod app;
pub mod controls;
pub mod event;
pub mod navigation;
pub mod screen;

pub use app::{AppConfig, WaveApp};
pub use controls::{AppBar, SeekBar};
pub use event::{AppEvent, ControlFlow};
pub use navigation::{
    attach_from, AttachOptions, NavigationHost, NavigationOutcome, ScreenNavigator,
    SharedElement, Transition,
};
pub use screen::{DemoScreen, Screen, ScreenId, SeekbarScreen, ToolbarScreen};
