use crate::cursor::Cursor;
use crate::testutils::*;

#[test]
fn cursor_starts_at_zero() {
    let cursor = Cursor::default();
    assert_eq!(cursor.current, 0);
}

#[test]
fn cursor_moves_down_and_wraps() {
    let mut cursor = Cursor::default();
    cursor.handle(Some(&down()), 3);
    assert_eq!(cursor.current, 1);
    cursor.handle(Some(&down()), 3);
    assert_eq!(cursor.current, 2);
    cursor.handle(Some(&down()), 3);
    assert_eq!(cursor.current, 0);
}

#[test]
fn cursor_moves_up_and_wraps() {
    let mut cursor = Cursor::default();
    cursor.handle(Some(&up()), 3);
    assert_eq!(cursor.current, 2);
    cursor.handle(Some(&up()), 3);
    assert_eq!(cursor.current, 1);
}

#[test]
fn cursor_ignores_empty_list() {
    let mut cursor = Cursor::default();
    cursor.handle(Some(&down()), 0);
    assert_eq!(cursor.current, 0);
}

#[test]
fn cursor_clamp_pulls_back_in_bounds() {
    let mut cursor = Cursor { current: 5 };
    cursor.clamp(3);
    assert_eq!(cursor.current, 2);

    cursor.clamp(0);
    assert_eq!(cursor.current, 0);
}
