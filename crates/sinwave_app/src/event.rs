//! Application events

use crate::screen::ScreenId;

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Events delivered to [`WaveApp`](crate::WaveApp)
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// The window was resized (physical pixels)
    Resized { width: f32, height: f32 },
    /// The slider on the seek bar screen moved
    SeekBarProgress { progress: i32, from_user: bool },
    /// The collapsing header on the toolbar screen scrolled
    AppBarOffset { offset: i32 },
    /// Switch to another screen
    Navigate {
        screen: ScreenId,
        add_to_back_stack: bool,
    },
    /// The user pressed back
    Back,
    /// Time to render a frame
    Frame,
    /// The window close was requested
    CloseRequested,
}
