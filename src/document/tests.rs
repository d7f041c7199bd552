use super::*;

#[test]
fn test_from_text_basic() {
    let doc = TextDocument::from_text("hello\nworld");
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line(0), "hello");
    assert_eq!(doc.line(1), "world");
}

#[test]
fn test_from_text_trailing_newline() {
    // A trailing newline produces an empty final line
    let doc = TextDocument::from_text("hello\n");
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line(1), "");
    assert_eq!(doc.line_len(1), 0);
}

#[test]
fn test_from_text_crlf() {
    let doc = TextDocument::from_text("one\r\ntwo");
    assert_eq!(doc.line(0), "one");
    assert_eq!(doc.line(1), "two");
}

#[test]
fn test_empty_document_is_single_empty_line() {
    let doc = TextDocument::new(Vec::new());
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line_len(0), 0);

    let doc = TextDocument::from_text("");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line_len(0), 0);
}

#[test]
fn test_line_len_is_in_characters() {
    let doc = TextDocument::from_text("héllo\n日本語");
    assert_eq!(doc.line_len(0), 5);
    assert_eq!(doc.line_len(1), 3);
}

#[test]
fn test_is_blank_line() {
    let doc = TextDocument::from_text("text\n\n   \n\t\nend");
    assert!(!is_blank_line(&doc, 0));
    assert!(is_blank_line(&doc, 1)); // empty
    assert!(is_blank_line(&doc, 2)); // spaces
    assert!(is_blank_line(&doc, 3)); // tab
    assert!(!is_blank_line(&doc, 4));
}
