//! Redraw requests
//!
//! A widget requests a redraw by raising its dirty flag. The host clears the
//! flag when it paints, so any number of requests between two frames
//! coalesce into one repaint.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared dirty flag (true = a redraw is pending)
pub type DirtyFlag = Arc<AtomicBool>;

/// Create a new, clean dirty flag
pub fn dirty_flag() -> DirtyFlag {
    Arc::new(AtomicBool::new(false))
}

/// Handle a widget uses to ask its host for a repaint
///
/// Clones share one flag, so a host can hand a clone to each widget and
/// check them all at once.
#[derive(Clone, Debug, Default)]
pub struct RedrawRequest {
    flag: DirtyFlag,
}

impl RedrawRequest {
    /// Create a request handle with its own flag
    pub fn new() -> Self {
        Self { flag: dirty_flag() }
    }

    /// Mark the widget as needing a repaint
    pub fn request(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether a repaint is pending
    pub fn is_pending(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clear the pending request, returning whether one was pending
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }
}
