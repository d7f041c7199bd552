//! Argument boundary detection
//!
//! Arguments are comma-separated spans inside a call or index expression.
//! The scan crosses lines and tracks parenthesis and square-bracket nesting
//! independently, since either kind can nest inside a single argument. The
//! character under the cursor is never examined: it belongs to the argument
//! unconditionally.
//!
//! Outer arguments own a single trailing comma - never a leading one, and
//! never whitespace beyond what sits between the content and that comma.

use super::{is_blank_char, CharCursor, SeekContext};
use crate::document::Document;
use crate::position::{Position, Selection};

/// What the forward scan stopped on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// A same-level comma
    Comma,
    /// The enclosing delimiter or the document edge
    Boundary,
}

/// Backward scan: the position right after the separator or enclosing
/// delimiter, with the following blank run excluded (clamped at `origin`)
fn scan_start(doc: &dyn Document, origin: Position) -> Position {
    let mut cur = CharCursor::new(doc, origin);
    let mut parens = 0i32;
    let mut brackets = 0i32;

    let raw = loop {
        let here = cur.pos();
        if !cur.retreat() {
            break cur.pos();
        }
        match cur.current() {
            ')' => parens += 1,
            ']' => brackets += 1,
            '(' if parens == 0 && brackets == 0 => break here,
            '(' => parens -= 1,
            '[' if parens == 0 && brackets == 0 => break here,
            '[' => brackets -= 1,
            ',' if parens == 0 && brackets == 0 => break here,
            _ => {}
        }
    };

    // The separator's trailing blanks are not part of the argument
    let mut cur = CharCursor::new(doc, raw);
    while cur.pos() < origin && is_blank_char(cur.current()) {
        if !cur.advance() {
            break;
        }
    }
    cur.pos()
}

/// Forward scan: the stop position and what was found there
fn scan_end(doc: &dyn Document, origin: Position) -> (Position, Stop) {
    let mut cur = CharCursor::new(doc, origin);
    let mut parens = 0i32;
    let mut brackets = 0i32;

    loop {
        if !cur.advance() {
            return (cur.pos(), Stop::Boundary);
        }
        match cur.current() {
            '(' => parens += 1,
            '[' => brackets += 1,
            ')' if parens == 0 && brackets == 0 => return (cur.pos(), Stop::Boundary),
            ')' => parens -= 1,
            ']' if parens == 0 && brackets == 0 => return (cur.pos(), Stop::Boundary),
            ']' => brackets -= 1,
            ',' if parens == 0 && brackets == 0 => return (cur.pos(), Stop::Comma),
            _ => {}
        }
    }
}

/// Start of the argument around `pos`. Identical for inner and outer: a
/// leading comma is never owned, and neither is the blank run after it.
pub fn start(ctx: &SeekContext, pos: Position, _inner: bool) -> Position {
    scan_start(ctx.doc, pos)
}

/// End of the argument around `pos`.
///
/// Outer includes the trailing comma when the scan stopped on one; inner
/// trims the blank run before the boundary (clamped at `pos`).
pub fn end(ctx: &SeekContext, pos: Position, inner: bool, _known_start: Option<Position>) -> Position {
    let doc = ctx.doc;
    let (stop, reason) = scan_end(doc, pos);

    if !inner {
        return match reason {
            // The comma is a real character, so stepping past it stays on
            // the same line
            Stop::Comma => Position::new(stop.line, stop.character + 1),
            Stop::Boundary => stop,
        };
    }

    let mut cur = CharCursor::new(doc, stop);
    while cur.pos() > pos {
        if !cur.retreat() {
            break;
        }
        if !is_blank_char(cur.current()) {
            cur.advance();
            break;
        }
    }
    cur.pos()
}

/// The whole argument around `pos`
pub fn whole(ctx: &SeekContext, pos: Position, inner: bool) -> Selection {
    Selection::new(start(ctx, pos, inner), end(ctx, pos, inner, None))
}
