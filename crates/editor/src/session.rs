//! Editor session: the single owner of all mutable editor state.
//!
//! The session consolidates the buffer, viewport, blink and auto-scroll
//! tasks, focus, and mouse-drag state into one struct the host loop works
//! with. Hosts feed it classified input events (`handle_key`,
//! `handle_mouse`, `handle_scroll`), drive time with `tick(dt)`, and read
//! the render-facing accessors afterwards. There is no hidden shared
//! state; every operation goes through `&mut self`.
//!
//! All state transitions run to completion inside one event call before
//! the next is delivered — the host's event queue is the only
//! serialization this core needs. The one asynchronous operation,
//! clipboard read, re-enters through that same queue via
//! `clipboard_read_complete`, so its buffer mutation is atomic with
//! respect to every other event.

use canvas_edit_buffer::{LineBuffer, Position};
use canvas_edit_input::{KeyEvent, MouseEvent, MouseEventKind, ScrollDelta};

use crate::auto_scroll::AutoScroll;
use crate::blink::CursorBlink;
use crate::clipboard::ClipboardRequest;
use crate::dispatch::{resolve_key, Command, Dispatch};
use crate::metrics::ViewMetrics;
use crate::viewport::Viewport;

/// Weight applied to wheel delta before it reaches the scroll offset.
const WHEEL_SCROLL_WEIGHT: f64 = 0.6;
/// Minimum milliseconds between selection-drag cursor updates.
const DRAG_INTERVAL_MS: f64 = 30.0;
/// Upper bound on a single tick's elapsed time, so a stalled host (hidden
/// tab, paused loop) cannot produce a huge scroll jump.
const MAX_TICK_MS: f64 = 400.0;
/// Hit-testing selects as if from the vertical center of the text cursor,
/// not its top.
const CURSOR_CENTER_OFFSET_Y: f64 = 7.0;

/// What the session did with a key event.
///
/// The host uses this to decide whether to suppress its environment's
/// default handling and whether it owes the session a clipboard operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event was consumed; suppress any default behavior.
    Handled,
    /// The event was consumed and the host must service a clipboard
    /// request.
    Clipboard(ClipboardRequest),
    /// The event belongs to the host environment (reserved shortcut).
    PassedThrough,
    /// The key is not recognized by the editor.
    Ignored,
}

/// Consolidated editor state for one editing surface.
pub struct EditorSession {
    buffer: LineBuffer,
    viewport: Viewport,
    metrics: ViewMetrics,
    blink: CursorBlink,
    auto_scroll: AutoScroll,
    /// Whether the editing surface has keyboard focus; the cursor is only
    /// drawn while focused
    focused: bool,
    /// True between mouse press and release while a drag-selection is in
    /// progress
    selecting: bool,
    /// Timestamp of the last applied drag update, for rate limiting
    last_drag_ms: f64,
    /// Viewport width in pixels (the scroll model only needs the height,
    /// but the host reports both)
    view_width: f64,
}

impl EditorSession {
    /// Creates a session around the given seed buffer.
    ///
    /// The viewport starts with zero size; call `set_viewport_size` once
    /// the host knows its geometry.
    pub fn new(buffer: LineBuffer, metrics: ViewMetrics) -> Self {
        let mut viewport = Viewport::new(&metrics);
        viewport.update_max_scroll(buffer.line_count());
        Self {
            buffer,
            viewport,
            metrics,
            blink: CursorBlink::new(),
            auto_scroll: AutoScroll::new(),
            focused: true,
            selecting: false,
            last_drag_ms: 0.0,
            view_width: 0.0,
        }
    }

    /// Creates a session with an empty buffer.
    pub fn empty(metrics: ViewMetrics) -> Self {
        Self::new(LineBuffer::new(), metrics)
    }

    // ==================== Render-facing accessors ====================

    /// Returns the buffer being edited.
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Returns mutable access to the buffer.
    ///
    /// After direct mutations the caller should let the session settle the
    /// derived state via `handle_*`/`tick`, or the scroll bound may lag the
    /// line count until the next event.
    pub fn buffer_mut(&mut self) -> &mut LineBuffer {
        &mut self.buffer
    }

    /// Returns the cursor position.
    pub fn cursor_position(&self) -> Position {
        self.buffer.cursor_position()
    }

    /// Returns true if the cursor should currently be drawn.
    pub fn cursor_visible(&self) -> bool {
        self.focused && self.blink.visible()
    }

    /// Returns the selection anchor position.
    pub fn selection_anchor(&self) -> Position {
        self.buffer.selection_anchor()
    }

    /// Returns the selection as (start, end) in document order, if any.
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        self.buffer.selection_range()
    }

    /// Returns the current scroll offset in pixels.
    pub fn scroll_px(&self) -> f64 {
        self.viewport.scroll_px()
    }

    /// Returns the current scroll bound in pixels.
    pub fn max_scroll_px(&self) -> f64 {
        self.viewport.max_scroll_px()
    }

    /// Returns the range of lines a renderer should draw.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        self.viewport.visible_range(self.buffer.line_count())
    }

    /// Returns the view geometry the session was configured with.
    pub fn metrics(&self) -> &ViewMetrics {
        &self.metrics
    }

    /// Returns the viewport size as (width, height) in pixels.
    pub fn view_size(&self) -> (f64, f64) {
        (self.view_width, self.viewport.view_height())
    }

    // ==================== Host geometry and focus ====================

    /// Records a new viewport size and re-clamps the scroll offset.
    pub fn set_viewport_size(&mut self, width_px: f64, height_px: f64) {
        self.view_width = width_px;
        self.viewport
            .update_size(height_px, self.buffer.line_count());
    }

    /// Records focus entering or leaving the editing surface.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.blink.reset();
        }
    }

    /// Returns whether the editing surface has focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    // ==================== Keyboard ====================

    /// Handles a key-down event.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        match resolve_key(&event) {
            Some(Dispatch::Command(cmd)) => match self.execute_command(cmd) {
                Some(request) => KeyOutcome::Clipboard(request),
                None => KeyOutcome::Handled,
            },
            Some(Dispatch::Suppress) => KeyOutcome::Handled,
            Some(Dispatch::PassThrough) => KeyOutcome::PassedThrough,
            None => KeyOutcome::Ignored,
        }
    }

    /// The host reports release of the primary modifier here; it ends any
    /// held-key scrolling.
    pub fn primary_modifier_released(&mut self) {
        self.auto_scroll.stop();
    }

    /// Executes a resolved command, returning a clipboard request when one
    /// is needed.
    fn execute_command(&mut self, cmd: Command) -> Option<ClipboardRequest> {
        match cmd {
            Command::InsertChar(ch) => {
                self.buffer.delete_selection();
                let mut text = [0u8; 4];
                self.buffer.insert_text(ch.encode_utf8(&mut text));
                self.after_edit();
            }
            Command::InsertNewline => {
                self.buffer.delete_selection();
                self.buffer.insert_newline();
                self.after_edit();
            }
            Command::InsertTab => {
                self.buffer.insert_tab();
                self.after_edit();
            }
            Command::DeleteBackward => {
                self.buffer.delete_backward();
                self.after_edit();
            }
            Command::DeleteForward => {
                self.buffer.delete_forward();
                self.after_edit();
            }
            Command::DeleteCurrentLine => {
                self.buffer.delete_current_line();
                self.after_edit();
            }
            Command::MoveLeft { extend } => {
                if self.buffer.move_left(extend) {
                    self.after_move();
                }
            }
            Command::MoveRight { extend } => {
                if self.buffer.move_right(extend) {
                    self.after_move();
                }
            }
            Command::MoveUp { extend } => {
                if self.buffer.move_up(extend) {
                    self.after_move();
                }
            }
            Command::MoveDown { extend } => {
                if self.buffer.move_down(extend) {
                    self.after_move();
                }
            }
            Command::MoveWordLeft { extend } => {
                if self.buffer.move_word_left(extend) {
                    self.after_move();
                }
            }
            Command::MoveWordRight { extend } => {
                if self.buffer.move_word_right(extend) {
                    self.after_move();
                }
            }
            Command::MoveToLineStart { extend } => {
                if self.buffer.move_to_line_start(extend) {
                    self.after_move();
                }
            }
            Command::MoveToLineEnd { extend } => {
                if self.buffer.move_to_line_end(extend) {
                    self.after_move();
                }
            }
            Command::SelectAll => {
                self.buffer.select_all();
                self.after_move();
            }
            Command::CopySelection => {
                return self.buffer.selected_text().map(ClipboardRequest::Write);
            }
            Command::Paste => return Some(ClipboardRequest::Read),
            Command::ToggleScrollUp => self.auto_scroll.toggle_up(),
            Command::ToggleScrollDown => self.auto_scroll.toggle_down(),
        }
        None
    }

    /// Settles derived state after a buffer mutation: the line count may
    /// have changed, the cursor moved, and the cursor should be solidly
    /// visible.
    fn after_edit(&mut self) {
        self.viewport.update_max_scroll(self.buffer.line_count());
        self.after_move();
    }

    /// Settles derived state after a cursor move.
    fn after_move(&mut self) {
        self.viewport
            .ensure_visible(self.buffer.cursor_position().line);
        self.blink.reset();
    }

    // ==================== Mouse ====================

    /// Handles a mouse event. Returns true if visible state changed.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Down => {
                let pos = self.position_at_point(event.position.0, event.position.1);
                self.buffer.set_cursor(pos, event.modifiers.shift);
                self.selecting = true;
                self.after_move();
                true
            }
            MouseEventKind::Up => {
                self.selecting = false;
                false
            }
            MouseEventKind::Moved => {
                if !self.selecting {
                    return false;
                }
                if event.timestamp_ms - self.last_drag_ms <= DRAG_INTERVAL_MS {
                    return false;
                }
                self.last_drag_ms = event.timestamp_ms;
                let pos = self.position_at_point(event.position.0, event.position.1);
                // Drags grow the selection: the anchor stays where the
                // press put it
                self.buffer.set_cursor(pos, true);
                self.after_move();
                true
            }
        }
    }

    /// Converts view-space pixel coordinates to a buffer position.
    ///
    /// The column is rounded to the nearest character boundary; the line
    /// accounts for the scroll offset and selects from the vertical center
    /// of the text cursor. Both are clamped into the buffer.
    fn position_at_point(&self, x: f64, y: f64) -> Position {
        let col = ((x - self.metrics.text_origin_x) / self.metrics.char_width).round();
        let col = if col < 0.0 { 0 } else { col as usize };
        let line = ((y - self.metrics.first_line_offset_y
            + CURSOR_CENTER_OFFSET_Y
            + self.viewport.scroll_px())
            / self.metrics.line_height)
            .floor();
        let line = if line < 0.0 { 0 } else { line as usize };
        self.buffer.clamp_position(Position::new(line, col))
    }

    // ==================== Wheel and timers ====================

    /// Handles a wheel/trackpad scroll. Returns true if the offset moved.
    pub fn handle_scroll(&mut self, delta: ScrollDelta) -> bool {
        self.viewport
            .scroll_by((delta.dy * WHEEL_SCROLL_WEIGHT).round())
    }

    /// Advances the session's periodic tasks by `dt_ms` of elapsed time.
    ///
    /// Integrates held-key scrolling and the cursor blink. The delta is
    /// clamped to a maximum step. Returns true if visible state changed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let dt = dt_ms.min(MAX_TICK_MS);
        let scrolled = self.auto_scroll.tick(dt, &mut self.viewport);
        let blinked = self.blink.tick(dt);
        scrolled || blinked
    }

    /// Restarts the cursor blink cycle with the cursor visible.
    pub fn reset_blink(&mut self) {
        self.blink.reset();
    }

    // ==================== Clipboard completion ====================

    /// Applies the text of a completed clipboard read as a paste.
    pub fn clipboard_read_complete(&mut self, text: &str) {
        self.buffer.insert_multiline(text);
        self.after_edit();
    }

    /// Records a failed or denied clipboard read. State is unchanged and
    /// nothing is retried.
    pub fn clipboard_read_failed(&mut self) {
        log::warn!("clipboard read failed or was denied; paste ignored");
    }

    /// Records a failed clipboard write. State is unchanged.
    pub fn clipboard_write_failed(&mut self) {
        log::warn!("clipboard write failed; copy dropped");
    }
}
