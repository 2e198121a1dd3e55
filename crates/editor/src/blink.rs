//! Cursor blink state.
//!
//! The blink is one of the session's two periodic tasks, driven by the
//! host's `tick(dt)` calls rather than by an owned timer, so it is fully
//! deterministic under test. Every cursor-moving operation resets the
//! phase, keeping the cursor solidly visible right after a move.

/// Milliseconds between visibility toggles.
const BLINK_INTERVAL_MS: f64 = 620.0;

/// Accumulates elapsed time and toggles cursor visibility.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    visible: bool,
    elapsed_ms: f64,
}

impl CursorBlink {
    /// Creates a blink state with the cursor visible.
    pub fn new() -> Self {
        Self {
            visible: true,
            elapsed_ms: 0.0,
        }
    }

    /// Returns whether the cursor is currently in its visible phase.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Advances the blink clock by `dt_ms`.
    ///
    /// Returns true if the visibility flag toggled at least once.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        self.elapsed_ms += dt_ms;
        let mut toggled = false;
        while self.elapsed_ms >= BLINK_INTERVAL_MS {
            self.elapsed_ms -= BLINK_INTERVAL_MS;
            self.visible = !self.visible;
            toggled = true;
        }
        toggled
    }

    /// Restarts the blink cycle with the cursor visible.
    pub fn reset(&mut self) {
        self.visible = true;
        self.elapsed_ms = 0.0;
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}
