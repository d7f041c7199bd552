//! Paragraph boundary detection
//!
//! A paragraph is a maximal run of consecutive non-blank lines. Blank-line
//! runs between paragraphs belong to the preceding paragraph's outer extent.

use super::SeekContext;
use crate::document::{is_blank_line, Document};
use crate::position::{document_end, document_start, Position, Selection};

/// Start of the paragraph around `pos`: the first line of the contiguous
/// non-blank run, or the document start when only blanks precede
pub fn start(ctx: &SeekContext, pos: Position, _inner: bool) -> Position {
    let doc = ctx.doc;
    let mut l = pos.line;

    // From a blank line, anchor on the previous paragraph
    if is_blank_line(doc, l) && l > 0 {
        l -= 1;
    }
    while l > 0 && is_blank_line(doc, l) {
        l -= 1;
    }
    if is_blank_line(doc, l) {
        return document_start();
    }
    while l > 0 && !is_blank_line(doc, l - 1) {
        l -= 1;
    }
    Position::new(l, 0)
}

/// End of the paragraph around `pos` (or `known_start` when supplied).
///
/// Inner stops at the break of the last content line; outer also takes the
/// trailing run of blank lines.
pub fn end(ctx: &SeekContext, pos: Position, inner: bool, known_start: Option<Position>) -> Position {
    let doc = ctx.doc;
    let count = doc.line_count();
    let base = known_start.unwrap_or(pos);

    let mut l = base.line;
    while l < count && !is_blank_line(doc, l) {
        l += 1;
    }
    if l >= count {
        return document_end(doc);
    }

    if inner {
        // A blank run at the very start of the document has no content line
        // before it; the inner boundary degenerates to the document start
        if l == 0 {
            return document_start();
        }
        return Position::new(l - 1, doc.line_len(l - 1));
    }

    let mut last_blank = l;
    while last_blank + 1 < count && is_blank_line(doc, last_blank + 1) {
        last_blank += 1;
    }
    Position::new(last_blank, doc.line_len(last_blank))
}

/// The whole paragraph around `pos`.
///
/// Invoked exactly on a blank line that is immediately followed by content,
/// the result is the next paragraph rather than the gap.
pub fn whole(ctx: &SeekContext, pos: Position, inner: bool) -> Selection {
    let doc = ctx.doc;
    let s = if is_blank_line(doc, pos.line)
        && pos.line + 1 < doc.line_count()
        && !is_blank_line(doc, pos.line + 1)
    {
        Position::new(pos.line + 1, 0)
    } else {
        start(ctx, pos, inner)
    };
    Selection::new(s, end(ctx, s, inner, Some(s)))
}
