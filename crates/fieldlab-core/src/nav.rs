//! Navbar visibility.
//!
//! The bar slides away while the reader scrolls down and returns as soon as
//! they scroll up. Jitter of a few pixels is ignored.

/// Scroll deltas at or below this are ignored.
pub const SCROLL_JITTER: f64 = 4.0;

/// The bar never hides this close to the top of the page.
pub const TOP_ZONE: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HideOnScroll {
    last_y: f64,
    hidden: bool,
}

impl HideOnScroll {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feeds a new scroll offset. Returns whether visibility changed.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let delta = y - self.last_y;
        if delta.abs() <= SCROLL_JITTER {
            return false;
        }
        let hidden = delta > 0.0 && y > TOP_ZONE;
        self.last_y = y;
        let changed = hidden != self.hidden;
        self.hidden = hidden;
        changed
    }
}
