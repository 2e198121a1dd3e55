//! Held-key continuous scrolling.
//!
//! The scroll hotkeys toggle a direction rather than acting while held: a
//! press starts scrolling, and a press of either hotkey while scrolling is
//! active stops it. Releasing the primary modifier also stops it (the
//! session forwards that from the host). Movement is integrated in the
//! session's `tick(dt)` with the delta clamped upstream, so a stalled host
//! (hidden tab, paused loop) cannot produce a huge jump.

use crate::viewport::Viewport;

/// Scroll speed in pixels per millisecond of elapsed time.
const KEY_SCROLL_SPEED: f64 = 0.40;

/// Direction state for held-key scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoScroll {
    up: bool,
    down: bool,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if either direction is engaged.
    pub fn is_active(&self) -> bool {
        self.up || self.down
    }

    /// Handles the scroll-up hotkey: starts scrolling up, or stops any
    /// active scrolling.
    pub fn toggle_up(&mut self) {
        if self.is_active() {
            self.stop();
        } else {
            self.up = true;
        }
    }

    /// Handles the scroll-down hotkey: starts scrolling down, or stops any
    /// active scrolling.
    pub fn toggle_down(&mut self) {
        if self.is_active() {
            self.stop();
        } else {
            self.down = true;
        }
    }

    /// Stops scrolling in both directions.
    pub fn stop(&mut self) {
        self.up = false;
        self.down = false;
    }

    /// Integrates the active direction over `dt_ms`, clamped by the
    /// viewport's bounds. Reaching either bound disengages.
    ///
    /// Returns true if the scroll offset changed.
    pub fn tick(&mut self, dt_ms: f64, viewport: &mut Viewport) -> bool {
        if self.up && self.down {
            return false;
        }
        if self.up {
            let changed = viewport.scroll_by(-KEY_SCROLL_SPEED * dt_ms);
            if viewport.scroll_px() <= 0.0 {
                self.stop();
            }
            changed
        } else if self.down {
            let changed = viewport.scroll_by(KEY_SCROLL_SPEED * dt_ms);
            if viewport.scroll_px() >= viewport.max_scroll_px() {
                self.stop();
            }
            changed
        } else {
            false
        }
    }
}
