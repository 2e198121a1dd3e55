//! Input event types for keyboard, mouse, and scroll handling.
//!
//! These types abstract over the host platform's raw event objects and
//! provide a clean Rust-native interface for input handling. The host (DOM
//! event wiring, native window glue, a test harness) translates its events
//! into these types; the editor core never sees platform details.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }
}

/// Modifier keys that can be held during a key or mouse event.
///
/// `primary` is the platform's main command modifier: ⌘ on macOS hosts,
/// Ctrl elsewhere. The host decides which physical key maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Primary command modifier (Cmd/Ctrl)
    pub primary: bool,
    /// Alt/Option key
    pub alt: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.primary && !self.alt
    }

    /// Returns a Modifiers with only shift held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    /// Returns a Modifiers with only the primary modifier held.
    pub fn primary() -> Self {
        Self {
            primary: true,
            ..Default::default()
        }
    }

    /// Returns a Modifiers with only alt held.
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }
}

/// Keys that can be pressed.
///
/// Multi-character key names the host cannot map onto one of these
/// variants simply never reach the editor core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
}

/// Scroll delta from trackpad or mouse wheel.
///
/// The editor only scrolls vertically; `dx` is carried for hosts that
/// report it but is ignored by the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDelta {
    /// Horizontal scroll amount (positive = right)
    pub dx: f64,
    /// Vertical scroll amount (positive = down)
    pub dy: f64,
}

impl ScrollDelta {
    /// Creates a new ScrollDelta.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// Position in view coordinates (pixels from top-left)
    pub position: (f64, f64),
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
    /// Host-supplied event timestamp in milliseconds.
    ///
    /// Only its monotonic progression matters; the core uses it to
    /// rate-limit drag updates.
    pub timestamp_ms: f64,
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Mouse button pressed
    Down,
    /// Mouse button released, or the pointer left the editor area
    Up,
    /// Mouse moved with the button held (drag)
    Moved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_char() {
        let event = KeyEvent::char('a');
        assert_eq!(event.key, Key::Char('a'));
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_modifiers_is_empty() {
        assert!(Modifiers::default().is_empty());
        assert!(!Modifiers::shift().is_empty());
        assert!(!Modifiers::primary().is_empty());
        assert!(!Modifiers::alt().is_empty());
    }

    #[test]
    fn test_modifier_constructors_are_exclusive() {
        let m = Modifiers::primary();
        assert!(m.primary);
        assert!(!m.shift);
        assert!(!m.alt);
    }
}
