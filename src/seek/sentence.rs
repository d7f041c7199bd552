//! Sentence boundary detection
//!
//! Sentences end on a terminator character or a paragraph gap (two
//! consecutive line breaks). The terminator list below is part of the
//! engine's observable contract: changing it changes sentence semantics
//! everywhere.

use log::trace;

use super::{is_blank_char, CharCursor, SeekContext};
use crate::document::{is_blank_line, Document};
use crate::position::{advance, document_start, Position, Selection};

/// Characters that terminate a sentence
pub const TERMINATORS: &[char] = &['.', '!', '?', '¡', '§', '¶', '¿', ';', '֞', '。'];

fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// Walk backward over the blank run ending at `origin` and return the
/// position of the last non-blank character before it.
///
/// At most one line break may be crossed on the way to content; crossing a
/// paragraph gap (two consecutive breaks) requires `allow_gap`, and even
/// then the scan must land on a terminator (the previous sentence's end).
/// Any other outcome leaves `origin` unchanged.
fn before_blank(ctx: &SeekContext, origin: Position, allow_gap: bool) -> Position {
    let mut cur = CharCursor::new(ctx.doc, origin);
    let mut breaks = 0usize;

    loop {
        if cur.at_break() {
            breaks += 1;
            if breaks >= 2 && !allow_gap {
                trace!("sentence scan at {origin} refused to cross a paragraph gap");
                return origin;
            }
        } else if !is_blank_char(cur.current()) {
            let landed = cur.pos();
            if landed == origin {
                return origin;
            }
            if breaks >= 2 && !is_terminator(cur.current()) {
                return origin;
            }
            return landed;
        }
        if !cur.retreat() {
            return origin;
        }
    }
}

fn start_impl(ctx: &SeekContext, pos: Position, allow_gap: bool) -> Position {
    let doc = ctx.doc;
    let from = before_blank(ctx, pos, allow_gap);

    // Scan backward for the previous terminator or paragraph gap. The
    // character at `from` is never examined: it may be this sentence's own
    // terminator.
    let mut cur = CharCursor::new(doc, from);
    let mut breaks = 0usize;
    let anchor = loop {
        let here = cur.pos();
        if !cur.retreat() {
            break document_start();
        }
        if cur.at_break() {
            breaks += 1;
            if breaks >= 2 {
                break here;
            }
        } else if !is_blank_char(cur.current()) {
            breaks = 0;
            if is_terminator(cur.current()) {
                break here;
            }
        }
    };

    // Land on the first content character
    let mut cur = CharCursor::new(doc, anchor);
    while is_blank_char(cur.current()) {
        if !cur.advance() {
            break;
        }
    }
    cur.pos()
}

/// Start of the sentence around `pos`. Never crosses a paragraph gap.
pub fn start(ctx: &SeekContext, pos: Position, _inner: bool) -> Position {
    start_impl(ctx, pos, false)
}

/// Start of the sentence around `pos`, allowed to cross one paragraph gap
/// onto the previous sentence's terminator. For repeated backward motions.
pub fn start_skipping_gap(ctx: &SeekContext, pos: Position) -> Position {
    start_impl(ctx, pos, true)
}

/// End of the sentence around `pos`.
///
/// When the caller already knows the sentence start, passing it as
/// `known_start` scans from there instead of guessing from an interior
/// position.
pub fn end(ctx: &SeekContext, pos: Position, inner: bool, known_start: Option<Position>) -> Position {
    let doc = ctx.doc;
    let mut base = known_start.unwrap_or(pos);

    if is_blank_line(doc, base.line) {
        // On a blank line the sentence can only begin on the next line, and
        // only when that line has content
        if base.line + 1 < doc.line_count() && !is_blank_line(doc, base.line + 1) {
            base = Position::new(base.line + 1, 0);
        } else {
            return base;
        }
    }

    let mut cur = CharCursor::new(doc, base);
    let mut breaks = 0usize;
    let mut first_break = base;

    loop {
        if cur.at_break() {
            if breaks == 0 {
                first_break = cur.pos();
            }
            breaks += 1;
            if breaks >= 2 {
                // Paragraph gap: the sentence ends at the first break, which
                // only the outer extent includes
                return if inner {
                    first_break
                } else {
                    advance(doc, first_break).unwrap_or(first_break)
                };
            }
        } else if !is_blank_char(cur.current()) {
            breaks = 0;
            if is_terminator(cur.current()) {
                let stop = cur.pos();
                let after = Position::new(stop.line, stop.character + 1);
                if inner {
                    return after;
                }
                // Outer: trailing blanks on the same line belong to the
                // sentence, then at most the one line break - never the next
                // line's content
                let len = ctx.doc.line_len(stop.line);
                let mut col = after.character;
                while col < len && is_blank_char(cur.line_char(col)) {
                    col += 1;
                }
                if col >= len && stop.line + 1 < doc.line_count() {
                    return Position::new(stop.line + 1, 0);
                }
                return Position::new(stop.line, col);
            }
        }
        if !cur.advance() {
            return cur.pos();
        }
    }
}

/// The whole sentence around `pos`
pub fn whole(ctx: &SeekContext, pos: Position, inner: bool) -> Selection {
    let s = start_impl(ctx, pos, false);
    let e = end(ctx, s, inner, Some(s));
    Selection::new(s, e)
}
