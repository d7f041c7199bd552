//! Indentation-block boundary detection
//!
//! An indent block is a maximal run of lines indented at least as far as a
//! reference line. Blank lines are transparent: they neither break the run
//! nor contribute an indent of their own.

use super::SeekContext;
use crate::document::{is_blank_line, Document};
use crate::position::{document_end, document_start, Position, Selection};

/// Column of the first non-whitespace character on a line
fn indent_of(doc: &dyn Document, line: usize) -> usize {
    doc.line(line)
        .chars()
        .take_while(|c| c.is_whitespace())
        .count()
}

/// Start of the indent block around `pos`.
///
/// Inner stops at the last line still indented to the reference; outer
/// extends to the line adjacent to the dedented one, spanning any blank
/// lines in between.
pub fn start(ctx: &SeekContext, pos: Position, inner: bool) -> Position {
    let doc = ctx.doc;

    // Reference line: nearest non-blank line at or above the origin
    let mut l = pos.line as isize;
    while l >= 0 && is_blank_line(doc, l as usize) {
        l -= 1;
    }
    if l < 0 {
        return document_start();
    }
    let reference = indent_of(doc, l as usize);

    let mut kept = l as usize;
    let mut scan = l - 1;
    loop {
        if scan < 0 {
            return document_start();
        }
        let line = scan as usize;
        if !is_blank_line(doc, line) {
            if indent_of(doc, line) < reference {
                return if inner {
                    Position::new(kept, 0)
                } else {
                    Position::new(line + 1, 0)
                };
            }
            kept = line;
        }
        scan -= 1;
    }
}

/// End of the indent block around `pos` (or `known_start` when supplied)
pub fn end(ctx: &SeekContext, pos: Position, inner: bool, known_start: Option<Position>) -> Position {
    let doc = ctx.doc;
    let count = doc.line_count();
    let base = known_start.unwrap_or(pos);

    let mut l = base.line;
    while l < count && is_blank_line(doc, l) {
        l += 1;
    }
    if l >= count {
        return document_end(doc);
    }
    let reference = indent_of(doc, l);

    let mut kept = l;
    let mut scan = l + 1;
    loop {
        if scan >= count {
            return document_end(doc);
        }
        if !is_blank_line(doc, scan) {
            if indent_of(doc, scan) < reference {
                return if inner {
                    Position::new(kept, doc.line_len(kept))
                } else {
                    Position::new(scan - 1, doc.line_len(scan - 1))
                };
            }
            kept = scan;
        }
        scan += 1;
    }
}

/// The whole indent block around `pos`
pub fn whole(ctx: &SeekContext, pos: Position, inner: bool) -> Selection {
    Selection::new(start(ctx, pos, inner), end(ctx, pos, inner, None))
}
