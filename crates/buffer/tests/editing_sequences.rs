//! Integration tests for realistic editing sequences.
//!
//! These tests drive the buffer through multi-step editing patterns and
//! verify that cursor, anchor, and preferred column stay coherent
//! throughout.

use canvas_edit_buffer::{LineBuffer, Position};

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = LineBuffer::new();

    buf.insert_text("hello");
    assert_eq!(buf.content(), "hello");
    assert_eq!(buf.cursor_position(), Position::new(0, 5));

    for _ in 0..5 {
        assert!(buf.delete_backward());
    }
    assert!(buf.is_empty());
    assert_eq!(buf.cursor_position(), Position::new(0, 0));
}

#[test]
fn test_type_multiple_lines_and_navigate() {
    let mut buf = LineBuffer::new();

    buf.insert_text("first line");
    buf.insert_newline();
    buf.insert_text("second line");
    buf.insert_newline();
    buf.insert_text("third line");

    assert_eq!(buf.line_count(), 3);
    assert_eq!(buf.line(0), "first line");
    assert_eq!(buf.line(1), "second line");
    assert_eq!(buf.line(2), "third line");

    buf.set_cursor(Position::new(1, 7), false); // "second |line"
    buf.insert_text("awesome ");
    assert_eq!(buf.line(1), "second awesome line");

    buf.move_up(false);
    assert_eq!(buf.cursor_position().line, 0);

    buf.move_down(false);
    buf.move_down(false);
    assert_eq!(buf.cursor_position().line, 2);
}

#[test]
fn test_rapid_insert_delete_cycles() {
    let mut buf = LineBuffer::new();

    // Simulate typing with corrections
    buf.insert_text("teh"); // typo
    buf.delete_backward();
    buf.delete_backward();
    buf.delete_backward();
    buf.insert_text("the");

    buf.insert_text(" ");

    buf.insert_text("quikc"); // typo
    buf.delete_backward();
    buf.delete_backward();
    buf.insert_text("ck");

    buf.insert_text(" brown fox");

    assert_eq!(buf.content(), "the quick brown fox");
}

#[test]
fn test_select_with_arrows_then_overtype() {
    let mut buf = LineBuffer::from_str("hello cruel world");

    // Select " cruel" by extending right from column 5
    buf.set_cursor(Position::new(0, 5), false);
    for _ in 0..6 {
        assert!(buf.move_right(true));
    }
    assert_eq!(buf.selected_text(), Some(" cruel".to_string()));

    // Overtyping starts by deleting the selection
    buf.delete_selection();
    assert_eq!(buf.content(), "hello world");
    assert_eq!(buf.cursor_position(), Position::new(0, 5));
}

#[test]
fn test_paste_then_remove_line_by_line() {
    let mut buf = LineBuffer::from_str("header\nfooter");
    buf.set_cursor(Position::new(0, 6), false);

    buf.insert_multiline("\nbody one\nbody two");
    assert_eq!(buf.line_count(), 4);
    assert_eq!(buf.line(1), "body one");
    assert_eq!(buf.cursor_position(), Position::new(2, 8));

    buf.delete_current_line();
    buf.set_cursor(Position::new(1, 0), false);
    buf.delete_current_line();
    assert_eq!(buf.lines(), &["header", "footer"]);
}

#[test]
fn test_vertical_travel_through_short_lines() {
    let mut buf = LineBuffer::from_str("a long first line\nab\n\nanother long line");
    buf.set_cursor(Position::new(0, 12), false);

    buf.move_down(false);
    assert_eq!(buf.cursor_position(), Position::new(1, 2));
    buf.move_down(false);
    assert_eq!(buf.cursor_position(), Position::new(2, 0));
    buf.move_down(false);
    // Preferred column survives the whole trip
    assert_eq!(buf.cursor_position(), Position::new(3, 12));
}

#[test]
fn test_word_hops_across_a_document() {
    let mut buf = LineBuffer::from_str("one two\nthree four");

    assert!(buf.move_word_right(false));
    assert_eq!(buf.cursor_position(), Position::new(0, 3));
    assert!(buf.move_word_right(false));
    assert_eq!(buf.cursor_position(), Position::new(0, 7));
    assert!(buf.move_word_right(false));
    assert_eq!(buf.cursor_position(), Position::new(1, 5));

    assert!(buf.move_word_left(false));
    assert_eq!(buf.cursor_position(), Position::new(1, 0));
    assert!(buf.move_word_left(false));
    assert_eq!(buf.cursor_position(), Position::new(0, 4));
}

#[test]
fn test_selection_spanning_everything_then_replace() {
    let mut buf = LineBuffer::from_str("first\nsecond\nthird");
    buf.select_all();
    buf.delete_selection();
    assert!(buf.is_empty());

    buf.insert_multiline("fresh\ncontent");
    assert_eq!(buf.lines(), &["fresh", "content"]);
    assert_eq!(buf.cursor_position(), Position::new(1, 7));
}

#[test]
fn test_backspace_walks_lines_back_together() {
    let mut buf = LineBuffer::from_str("ab\ncd\nef");
    buf.set_cursor(Position::new(2, 0), false);

    assert!(buf.delete_backward()); // join ef onto cd
    assert_eq!(buf.content(), "ab\ncdef");
    assert_eq!(buf.cursor_position(), Position::new(1, 2));

    buf.set_cursor(Position::new(1, 0), false);
    assert!(buf.delete_backward()); // join cdef onto ab
    assert_eq!(buf.content(), "abcdef");
    assert_eq!(buf.cursor_position(), Position::new(0, 2));
}
