//! Input controls that produce a waviness value
//!
//! - [`SeekBar`]: a linear slider with integer progress
//! - [`AppBar`]: a collapsing header reporting a vertical offset

/// A linear slider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeekBar {
    progress: i32,
    max: i32,
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::new(100)
    }
}

impl SeekBar {
    /// Slider at progress 0 with the given maximum
    pub fn new(max: i32) -> Self {
        Self {
            progress: 0,
            max: max.max(0),
        }
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Move the thumb, keeping progress within `[0, max]`
    pub fn set_progress(&mut self, progress: i32) {
        self.progress = progress.clamp(0, self.max);
    }

    /// Progress as a fraction of the maximum (0 when the maximum is 0)
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.progress as f32 / self.max as f32
    }
}

/// A collapsing header
///
/// The header's offset goes from 0 (fully expanded) down to minus its
/// scroll range. The scroll range is what remains of the header after the
/// pinned title and the pinned content are subtracted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppBar {
    /// Total header height
    pub total_height: f32,
    /// Height of the pinned title bar
    pub title_height: f32,
    /// Height of the pinned content below the title
    pub content_height: f32,
    offset: i32,
}

impl AppBar {
    pub fn new(total_height: f32, title_height: f32, content_height: f32) -> Self {
        Self {
            total_height,
            title_height,
            content_height,
            offset: 0,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Record a new offset reported by the scrolling container
    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// Distance the header can scroll before collapsing
    pub fn scroll_range(&self) -> f32 {
        self.total_height - self.title_height - self.content_height
    }

    /// How far the header has collapsed (0 = expanded, 1 = collapsed)
    pub fn scroll_fraction(&self) -> f32 {
        let range = self.scroll_range();
        if range <= 0.0 {
            return 0.0;
        }
        -(self.offset as f32) / range
    }

    /// How expanded the header is (1 = expanded, 0 = collapsed)
    pub fn expansion(&self) -> f32 {
        1.0 - self.scroll_fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_bar_ratio() {
        let mut bar = SeekBar::new(200);
        bar.set_progress(50);
        assert_eq!(bar.ratio(), 0.25);

        bar.set_progress(500);
        assert_eq!(bar.progress(), 200);
        assert_eq!(bar.ratio(), 1.0);

        bar.set_progress(-4);
        assert_eq!(bar.ratio(), 0.0);
    }

    #[test]
    fn test_seek_bar_zero_max() {
        let mut bar = SeekBar::new(0);
        bar.set_progress(10);
        assert_eq!(bar.ratio(), 0.0);
    }

    #[test]
    fn test_app_bar_expansion() {
        // 200 total - 56 title - 44 content = 100 px of scroll
        let mut bar = AppBar::new(200.0, 56.0, 44.0);
        assert_eq!(bar.scroll_range(), 100.0);
        assert_eq!(bar.expansion(), 1.0);

        bar.set_offset(-25);
        assert_eq!(bar.expansion(), 0.75);

        bar.set_offset(-100);
        assert_eq!(bar.expansion(), 0.0);
    }

    #[test]
    fn test_app_bar_without_range() {
        let mut bar = AppBar::new(100.0, 56.0, 44.0);
        bar.set_offset(-30);
        assert_eq!(bar.expansion(), 1.0);
    }
}
