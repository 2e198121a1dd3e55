//! canvas-edit-buffer: the text model for the canvas-edit editor.
//!
//! This crate provides a line-array text buffer with cursor, selection, and
//! preferred-column tracking. It holds the document as an ordered list of
//! line strings (never empty; an empty document is one empty line) and is
//! mutated exclusively through the editing and navigation operations on
//! [`LineBuffer`].
//!
//! # Example
//!
//! ```
//! use canvas_edit_buffer::{LineBuffer, Position};
//!
//! let mut buffer = LineBuffer::from_str("Hello, world!");
//! buffer.set_cursor(Position::new(0, 5), false);
//! buffer.insert_newline();
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.cursor_position(), Position::new(1, 0));
//! ```
//!
//! # Selection model
//!
//! The selection is the span between the cursor and a second position, the
//! anchor. There is no "selection active" flag: the selection is empty
//! exactly when the anchor equals the cursor. Direction is never stored;
//! [`LineBuffer::selection_range`] derives document order on demand.

mod line_buffer;
mod types;

pub use line_buffer::{LineBuffer, TAB_STOP};
pub use types::Position;
