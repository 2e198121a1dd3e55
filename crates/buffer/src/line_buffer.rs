//! LineBuffer is the main public API for text editing operations.
//!
//! It stores the document as an ordered list of line strings and tracks the
//! cursor as (line, column) together with a selection anchor and the sticky
//! "preferred column" used by vertical movement.
//!
//! The buffer is never empty: a document with no content is a single empty
//! line. Every operation leaves the cursor and anchor at valid positions;
//! boundary conditions are defined no-ops or clamped results, never errors.

use crate::types::Position;

/// Column interval used by `insert_tab`: the inserted spaces pad the cursor
/// out to the next multiple of this stop.
pub const TAB_STOP: usize = 4;

/// Returns the number of characters in a line.
fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Converts a character column to a byte index into `line`.
///
/// A column at or past the end of the line maps to `line.len()`.
fn byte_of_col(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// A multi-line text buffer with cursor and selection tracking.
///
/// The buffer maintains:
/// - Content storage as one `String` per line (no embedded line breaks)
/// - Cursor position as (line, column) plus a preferred column for
///   vertical movement
/// - A selection anchor; the selection is empty iff the anchor equals the
///   cursor position (there is no separate "selection active" flag)
///
/// Selection direction is never stored. `selection_range` derives document
/// order by comparing positions at the moment it is needed.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor: Position,
    /// Sticky column for vertical movement. Horizontal movement and clicks
    /// set it; moving up/down through shorter lines does not.
    preferred_col: usize,
    /// The non-moving end of the selection. Equals `cursor` when no
    /// selection is active.
    anchor: Position,
}

impl LineBuffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::default(),
            preferred_col: 0,
            anchor: Position::default(),
        }
    }

    /// Creates a buffer from the given content, splitting on `\n`.
    ///
    /// Note: We don't implement `FromStr` because it requires returning
    /// `Result`, but parsing a string into a LineBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
            cursor: Position::default(),
            preferred_col: 0,
            anchor: Position::default(),
        }
    }

    /// Creates a buffer from pre-split lines.
    ///
    /// An empty vector yields the canonical single-empty-line buffer.
    /// Lines must not contain `\n`.
    pub fn from_lines(lines: Vec<String>) -> Self {
        debug_assert!(lines.iter().all(|l| !l.contains('\n')));
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        Self {
            lines,
            cursor: Position::default(),
            preferred_col: 0,
            anchor: Position::default(),
        }
    }

    // ==================== Accessors ====================

    /// Returns the current cursor position.
    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    /// Returns the preferred column used for vertical movement.
    pub fn preferred_col(&self) -> usize {
        self.preferred_col
    }

    /// Returns the number of lines in the buffer. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the content of the specified line.
    ///
    /// Returns an empty string if the line index is out of bounds.
    pub fn line(&self, line: usize) -> &str {
        self.lines.get(line).map(String::as_str).unwrap_or("")
    }

    /// Returns all lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the character length of the specified line.
    pub fn line_len(&self, line: usize) -> usize {
        char_len(self.line(line))
    }

    /// Returns the entire buffer content with lines joined by `\n`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Returns true if the buffer holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Clamps a position to valid buffer bounds.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count() - 1);
        let col = pos.col.min(self.line_len(line));
        Position::new(line, col)
    }

    // ==================== Selection ====================

    /// Returns the selection anchor position.
    ///
    /// The anchor equals the cursor position when no selection is active.
    pub fn selection_anchor(&self) -> Position {
        self.anchor
    }

    /// Returns true if there is an active selection.
    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }

    /// Returns the selection as (start, end) in document order.
    ///
    /// Returns `None` if the selection is empty. This is the single place
    /// that decides which end of the cursor/anchor pair comes first.
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        if self.anchor == self.cursor {
            return None;
        }
        if self.anchor < self.cursor {
            Some((self.anchor, self.cursor))
        } else {
            Some((self.cursor, self.anchor))
        }
    }

    /// Returns the text within the selection range.
    ///
    /// Cross-line selections are joined with `\n`. Returns `None` if the
    /// selection is empty.
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection_range()?;
        if start.line == end.line {
            let line = self.line(start.line);
            let from = byte_of_col(line, start.col);
            let to = byte_of_col(line, end.col);
            return Some(line[from..to].to_string());
        }
        let mut text = String::new();
        let first = self.line(start.line);
        text.push_str(&first[byte_of_col(first, start.col)..]);
        for line in &self.lines[start.line + 1..end.line] {
            text.push('\n');
            text.push_str(line);
        }
        let last = self.line(end.line);
        text.push('\n');
        text.push_str(&last[..byte_of_col(last, end.col)]);
        Some(text)
    }

    /// Selects the entire buffer: anchor at the start, cursor at the end.
    pub fn select_all(&mut self) {
        self.anchor = Position::new(0, 0);
        let last_line = self.line_count() - 1;
        self.cursor = Position::new(last_line, self.line_len(last_line));
        self.preferred_col = self.cursor.col;
        self.debug_assert_valid();
    }

    /// Collapses the selection so the anchor matches the cursor.
    fn collapse_selection(&mut self) {
        self.anchor = self.cursor;
    }

    /// Collapses the anchor to the cursor unless the caller is extending
    /// the selection.
    fn collapse_unless(&mut self, extend: bool) {
        if !extend {
            self.collapse_selection();
        }
    }

    // ==================== Cursor placement ====================

    /// Sets the cursor to an arbitrary position, clamped to valid bounds.
    ///
    /// The preferred column follows the new position (placement is a
    /// horizontal intent). When `extend` is false the anchor collapses to
    /// the cursor; when true the anchor stays put, growing the selection.
    pub fn set_cursor(&mut self, pos: Position, extend: bool) {
        self.cursor = self.clamp_position(pos);
        self.preferred_col = self.cursor.col;
        self.collapse_unless(extend);
        self.debug_assert_valid();
    }

    // ==================== Character and line steps ====================

    /// Moves the cursor left by one column, wrapping to the end of the
    /// previous line at a line boundary.
    ///
    /// Returns false (leaving all state untouched) at the document start.
    pub fn move_left(&mut self, extend: bool) -> bool {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        } else {
            return false;
        }
        self.preferred_col = self.cursor.col;
        self.collapse_unless(extend);
        self.debug_assert_valid();
        true
    }

    /// Moves the cursor right by one column, wrapping to the start of the
    /// next line at a line boundary.
    ///
    /// Returns false (leaving all state untouched) at the document end.
    pub fn move_right(&mut self, extend: bool) -> bool {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        } else {
            return false;
        }
        self.preferred_col = self.cursor.col;
        self.collapse_unless(extend);
        self.debug_assert_valid();
        true
    }

    /// Moves the cursor up one line.
    ///
    /// The new column is `min(preferred_col, line length)`; the preferred
    /// column itself is not updated, so repeated vertical moves through
    /// short lines remember the original horizontal intent.
    /// Returns false at the first line.
    pub fn move_up(&mut self, extend: bool) -> bool {
        if self.cursor.line == 0 {
            return false;
        }
        self.cursor.line -= 1;
        self.cursor.col = self.preferred_col.min(self.line_len(self.cursor.line));
        self.collapse_unless(extend);
        self.debug_assert_valid();
        true
    }

    /// Moves the cursor down one line, applying the preferred-column rule.
    /// Returns false at the last line.
    pub fn move_down(&mut self, extend: bool) -> bool {
        if self.cursor.line + 1 >= self.line_count() {
            return false;
        }
        self.cursor.line += 1;
        self.cursor.col = self.preferred_col.min(self.line_len(self.cursor.line));
        self.collapse_unless(extend);
        self.debug_assert_valid();
        true
    }

    // ==================== Line boundary jumps ====================

    /// Moves the cursor to the start of the line, with an indentation
    /// toggle: the first press lands on the first non-whitespace column,
    /// and a second press (or a press already at that column) lands on
    /// column 0.
    pub fn move_to_line_start(&mut self, extend: bool) -> bool {
        let line = self.line(self.cursor.line);
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        self.cursor.col = if self.cursor.col == indent { 0 } else { indent };
        self.preferred_col = self.cursor.col;
        self.collapse_unless(extend);
        self.debug_assert_valid();
        true
    }

    /// Moves the cursor to the end of the line.
    pub fn move_to_line_end(&mut self, extend: bool) -> bool {
        self.cursor.col = self.line_len(self.cursor.line);
        self.preferred_col = self.cursor.col;
        self.collapse_unless(extend);
        self.debug_assert_valid();
        true
    }

    // ==================== Word skips ====================

    /// Moves the cursor to the previous word boundary.
    ///
    /// Whitespace immediately before the cursor is skipped, then the cursor
    /// lands just after the last space in what remains (or at column 0). At
    /// column 0 the search first steps to the end of the previous line.
    /// Returns false at the document start.
    pub fn move_word_left(&mut self, extend: bool) -> bool {
        match self.prev_word_stop(self.cursor) {
            Some(pos) => {
                self.cursor = pos;
                self.preferred_col = pos.col;
                self.collapse_unless(extend);
                self.debug_assert_valid();
                true
            }
            None => false,
        }
    }

    /// Moves the cursor to the next word boundary.
    ///
    /// Whitespace immediately after the cursor is skipped, then the cursor
    /// lands on the next space (or at the line end). At the line end the
    /// search first steps to the start of the next line. Returns false at
    /// the document end.
    pub fn move_word_right(&mut self, extend: bool) -> bool {
        match self.next_word_stop(self.cursor) {
            Some(pos) => {
                self.cursor = pos;
                self.preferred_col = pos.col;
                self.collapse_unless(extend);
                self.debug_assert_valid();
                true
            }
            None => false,
        }
    }

    /// Computes the landing position for a backward word skip, or `None`
    /// when the cursor is already at the document start.
    fn prev_word_stop(&self, pos: Position) -> Option<Position> {
        let mut line_idx = pos.line;
        let mut col = pos.col;
        if col == 0 {
            if line_idx == 0 {
                return None;
            }
            line_idx -= 1;
            col = self.line_len(line_idx);
            if col == 0 {
                return Some(Position::new(line_idx, 0));
            }
        }
        let chars: Vec<char> = self.line(line_idx).chars().collect();
        // Skip whitespace directly before the cursor, then scan back to the
        // space that ends the previous word.
        let mut end = col;
        while end > 0 && chars[end - 1].is_whitespace() {
            end -= 1;
        }
        let mut stop = end;
        while stop > 0 && chars[stop - 1] != ' ' {
            stop -= 1;
        }
        Some(Position::new(line_idx, stop))
    }

    /// Computes the landing position for a forward word skip, or `None`
    /// when the cursor is already at the document end.
    fn next_word_stop(&self, pos: Position) -> Option<Position> {
        let mut line_idx = pos.line;
        let mut col = pos.col;
        if col == self.line_len(line_idx) {
            if line_idx + 1 == self.line_count() {
                return None;
            }
            line_idx += 1;
            col = 0;
            if self.line_len(line_idx) == 0 {
                return Some(Position::new(line_idx, 0));
            }
        }
        let chars: Vec<char> = self.line(line_idx).chars().collect();
        let mut start = col;
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
        let mut stop = start;
        while stop < chars.len() && chars[stop] != ' ' {
            stop += 1;
        }
        Some(Position::new(line_idx, stop))
    }

    // ==================== Mutations ====================

    /// Inserts text containing no line breaks at the cursor.
    ///
    /// The cursor advances past the inserted text, the preferred column
    /// follows, and the anchor collapses to the cursor.
    pub fn insert_text(&mut self, text: &str) {
        debug_assert!(!text.contains('\n'));
        let line = &mut self.lines[self.cursor.line];
        let at = byte_of_col(line, self.cursor.col);
        line.insert_str(at, text);
        self.cursor.col += char_len(text);
        self.preferred_col = self.cursor.col;
        self.collapse_selection();
        self.debug_assert_valid();
    }

    /// Inserts text that may contain line breaks at the cursor.
    ///
    /// A single segment delegates to `insert_text`. Otherwise the first
    /// segment is appended to the text preceding the cursor, the last
    /// segment is prepended to the text following it, the inner segments
    /// become new lines, and all of them replace the current line in order.
    /// The cursor lands at the end of the last inserted segment and the
    /// anchor collapses.
    pub fn insert_multiline(&mut self, text: &str) {
        let segments: Vec<&str> = text.split('\n').collect();
        if segments.len() == 1 {
            self.insert_text(text);
            return;
        }
        let line_idx = self.cursor.line;
        let line = &self.lines[line_idx];
        let at = byte_of_col(line, self.cursor.col);
        let preceding = line[..at].to_string();
        let following = line[at..].to_string();

        let last_idx = segments.len() - 1;
        let mut replacement = Vec::with_capacity(segments.len());
        replacement.push(preceding + segments[0]);
        for segment in &segments[1..last_idx] {
            replacement.push((*segment).to_string());
        }
        let last_len = char_len(segments[last_idx]);
        replacement.push(segments[last_idx].to_string() + &following);

        self.lines.splice(line_idx..=line_idx, replacement);
        self.cursor = Position::new(line_idx + last_idx, last_len);
        self.preferred_col = self.cursor.col;
        self.collapse_selection();
        self.debug_assert_valid();
    }

    /// Splits the current line at the cursor into two consecutive lines.
    ///
    /// The cursor moves to column 0 of the new second line.
    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor.line];
        let at = byte_of_col(line, self.cursor.col);
        let trailing = line.split_off(at);
        self.cursor.line += 1;
        self.lines.insert(self.cursor.line, trailing);
        self.cursor.col = 0;
        self.preferred_col = 0;
        self.collapse_selection();
        self.debug_assert_valid();
    }

    /// Inserts spaces up to the next tab stop.
    ///
    /// Any active selection is deleted first; the pad width is computed
    /// from the collapsed cursor column.
    pub fn insert_tab(&mut self) {
        self.delete_selection();
        let spaces = TAB_STOP - self.cursor.col % TAB_STOP;
        self.insert_text(&" ".repeat(spaces));
    }

    /// Deletes the selected span and collapses cursor and anchor to its
    /// start. Returns false (a no-op) when the selection is empty.
    ///
    /// The span is normalized to document order first, so the result is
    /// identical whichever of cursor/anchor is the earlier position:
    /// a same-line span removes the substring between the two columns, and
    /// a cross-line span joins the start line's prefix to the end line's
    /// suffix, dropping every line in between.
    pub fn delete_selection(&mut self) -> bool {
        let (start, end) = match self.selection_range() {
            Some(range) => range,
            None => return false,
        };

        if start.line == end.line {
            let line = &mut self.lines[start.line];
            let from = byte_of_col(line, start.col);
            let to = byte_of_col(line, end.col);
            line.replace_range(from..to, "");
        } else {
            let first = self.line(start.line);
            let prefix = first[..byte_of_col(first, start.col)].to_string();
            let last = self.line(end.line);
            let suffix = last[byte_of_col(last, end.col)..].to_string();
            self.lines.drain(start.line + 1..=end.line);
            self.lines[start.line] = prefix + &suffix;
        }

        self.cursor = start;
        self.anchor = start;
        self.debug_assert_valid();
        true
    }

    /// Deletes the character before the cursor (Backspace).
    ///
    /// An active selection is deleted instead. At column 0 the current line
    /// joins onto the end of the previous line, the cursor landing at the
    /// join point. Returns false at the document start.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            self.preferred_col = self.cursor.col;
            let line = &mut self.lines[self.cursor.line];
            let at = byte_of_col(line, self.cursor.col);
            line.remove(at);
            self.collapse_selection();
            self.debug_assert_valid();
            true
        } else if self.cursor.line > 0 {
            let removed = self.lines.remove(self.cursor.line);
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
            self.lines[self.cursor.line].push_str(&removed);
            self.collapse_selection();
            self.debug_assert_valid();
            true
        } else {
            false
        }
    }

    /// Deletes the character after the cursor (forward delete).
    ///
    /// An active selection is deleted instead. At the line end the next
    /// line joins onto the current one, the cursor staying put. Returns
    /// false at the document end.
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.cursor.col < self.line_len(self.cursor.line) {
            let line = &mut self.lines[self.cursor.line];
            let at = byte_of_col(line, self.cursor.col);
            line.remove(at);
            self.preferred_col = self.cursor.col;
            self.collapse_selection();
            self.debug_assert_valid();
            true
        } else if self.cursor.line + 1 < self.line_count() {
            let removed = self.lines.remove(self.cursor.line + 1);
            self.lines[self.cursor.line].push_str(&removed);
            self.collapse_selection();
            self.debug_assert_valid();
            true
        } else {
            false
        }
    }

    /// Removes the cursor's line from the buffer.
    ///
    /// A single-line buffer is reset to one empty line with the cursor at
    /// the origin. Otherwise the cursor stays on the same line index
    /// (clamped to the new last line) and its column follows the
    /// preferred-column rule; when the preferred column does not fit, it is
    /// pulled down to the shorter line's length.
    pub fn delete_current_line(&mut self) {
        if self.lines.len() == 1 {
            self.lines[0].clear();
            self.cursor = Position::new(0, 0);
            self.preferred_col = 0;
        } else {
            self.lines.remove(self.cursor.line);
            if self.cursor.line > self.lines.len() - 1 {
                self.cursor.line = self.lines.len() - 1;
            }
            let new_len = self.line_len(self.cursor.line);
            if self.preferred_col <= new_len {
                self.cursor.col = self.preferred_col;
            } else {
                self.cursor.col = new_len;
                self.preferred_col = new_len;
            }
        }
        self.collapse_selection();
        self.debug_assert_valid();
    }

    // ==================== Validation ====================

    /// Debug assertion: the buffer is non-empty and cursor/anchor denote
    /// valid positions. Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn debug_assert_valid(&self) {
        debug_assert!(!self.lines.is_empty(), "buffer lost its last line");
        for pos in [self.cursor, self.anchor] {
            debug_assert!(
                pos.line < self.lines.len(),
                "position line {} out of bounds ({} lines)",
                pos.line,
                self.lines.len(),
            );
            debug_assert!(
                pos.col <= self.line_len(pos.line),
                "position col {} past end of line {} (len {})",
                pos.col,
                pos.line,
                self.line_len(pos.line),
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_assert_valid(&self) {}
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
