//! canvas-edit: the text-editing core of a canvas-rendered code editor.
//!
//! This crate turns classified input events (keystrokes, mouse
//! clicks/drags, wheel scrolls, clipboard completions, timer ticks) into
//! buffer, cursor, selection, and scroll mutations. It contains no
//! drawing, no DOM or window wiring, and no platform clipboard access;
//! a host owns those and talks to an [`EditorSession`]:
//!
//! ```
//! use canvas_edit::{EditorSession, KeyOutcome, ViewMetrics};
//! use canvas_edit_buffer::LineBuffer;
//! use canvas_edit_input::KeyEvent;
//!
//! let mut session = EditorSession::new(LineBuffer::from_str("hello"), ViewMetrics::default());
//! session.set_viewport_size(800.0, 600.0);
//! assert_eq!(session.handle_key(KeyEvent::char('!')), KeyOutcome::Handled);
//! assert_eq!(session.buffer().content(), "!hello");
//! ```
//!
//! After each event the host reads the render-facing accessors (lines,
//! cursor, selection anchor, scroll offset) and repaints. Clipboard
//! operations come back as [`ClipboardRequest`] values for the host to
//! service, keeping the permission-gated platform APIs outside the core.

mod auto_scroll;
mod blink;
mod clipboard;
mod dispatch;
mod metrics;
mod session;
mod viewport;

pub use clipboard::ClipboardRequest;
pub use metrics::ViewMetrics;
pub use session::{EditorSession, KeyOutcome};
pub use viewport::Viewport;
