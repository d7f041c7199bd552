use super::*;
use crate::document::TextDocument;

#[test]
fn test_position_ordering() {
    assert!(Position::new(0, 5) < Position::new(1, 0));
    assert!(Position::new(2, 1) < Position::new(2, 2));
    assert_eq!(Position::new(3, 4), Position::new(3, 4));
}

#[test]
fn test_direction_delta() {
    assert_eq!(Direction::Forward.delta(), 1);
    assert_eq!(Direction::Backward.delta(), -1);
}

#[test]
fn test_line_end_col() {
    assert_eq!(SelectionBehavior::Caret.line_end_col(5), 5);
    assert_eq!(SelectionBehavior::Character.line_end_col(5), 4);
    // Empty line: both behaviors clamp to column 0
    assert_eq!(SelectionBehavior::Caret.line_end_col(0), 0);
    assert_eq!(SelectionBehavior::Character.line_end_col(0), 0);
}

#[test]
fn test_advance_wraps_at_line_break() {
    let doc = TextDocument::from_text("ab\ncd");

    assert_eq!(
        advance(&doc, Position::new(0, 1)),
        Some(Position::new(0, 2))
    );
    // From the break slot onto the next line
    assert_eq!(
        advance(&doc, Position::new(0, 2)),
        Some(Position::new(1, 0))
    );
    // Document end
    assert_eq!(advance(&doc, Position::new(1, 2)), None);
}

#[test]
fn test_retreat_wraps_at_line_break() {
    let doc = TextDocument::from_text("ab\ncd");

    assert_eq!(
        retreat(&doc, Position::new(1, 0)),
        Some(Position::new(0, 2))
    );
    assert_eq!(
        retreat(&doc, Position::new(0, 1)),
        Some(Position::new(0, 0))
    );
    assert_eq!(retreat(&doc, Position::new(0, 0)), None);
}

#[test]
fn test_document_edges() {
    let doc = TextDocument::from_text("ab\ncd");
    assert_eq!(document_start(), Position::new(0, 0));
    assert_eq!(document_end(&doc), Position::new(1, 2));

    let empty = TextDocument::from_text("");
    assert_eq!(document_end(&empty), Position::new(0, 0));
}

#[test]
fn test_char_at_break_slot_is_sentinel() {
    let doc = TextDocument::from_text("ab\ncd");
    assert_eq!(char_at(&doc, Position::new(0, 0)), 'a');
    assert_eq!(char_at(&doc, Position::new(0, 2)), '\0');
    assert_eq!(char_at(&doc, Position::new(1, 1)), 'd');
}

#[test]
fn test_selection_helpers() {
    let sel = Selection::new(Position::new(1, 3), Position::new(0, 2));
    assert!(!sel.is_empty());
    assert_eq!(sel.min(), Position::new(0, 2));
    assert_eq!(sel.max(), Position::new(1, 3));

    let collapsed = Selection::new(Position::new(1, 1), Position::new(1, 1));
    assert!(collapsed.is_empty());
}
