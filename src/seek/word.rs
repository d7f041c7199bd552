//! Word boundary scans and the word object
//!
//! Word motions never cross a line boundary: the scan re-anchors onto an
//! adjacent non-empty line when the origin sits at a line edge, then walks
//! within that single line. Two charsets drive the runs: the configured word
//! charset ([`ObjectKind::Word`]) and the non-blank charset
//! ([`ObjectKind::BigWord`]).
//!
//! [`ObjectKind::Word`]: crate::seek::ObjectKind::Word
//! [`ObjectKind::BigWord`]: crate::seek::ObjectKind::BigWord

use log::trace;

use super::SeekContext;
use crate::charset::{CharClass, CharSet};
use crate::document::Document;
use crate::position::{Direction, Position, Selection, SelectionBehavior};

/// Find the next word boundary from `origin`.
///
/// `stop_at_end` selects word-end semantics (the scan consumes the gap
/// before a word and stops at its far edge) instead of word-start
/// semantics (the scan consumes a word and the gap after it).
///
/// # Returns
/// The selection from the scan anchor to the boundary, or `None` when no
/// further word exists in the scan direction.
///
/// # Examples
/// ```rust
/// use textseek::charset::CharSet;
/// use textseek::document::TextDocument;
/// use textseek::position::{Direction, Position, SelectionBehavior};
/// use textseek::seek::{word_boundary, SeekContext};
///
/// let doc = TextDocument::from_text("hello world");
/// let charset = CharSet::word();
/// let ctx = SeekContext::new(&doc, &charset, SelectionBehavior::Caret);
///
/// let found = word_boundary(Direction::Forward, Position::new(0, 0), false, &charset, &ctx);
/// assert_eq!(found.unwrap().active, Position::new(0, 6));
/// ```
pub fn word_boundary(
    direction: Direction,
    origin: Position,
    stop_at_end: bool,
    charset: &CharSet,
    ctx: &SeekContext,
) -> Option<Selection> {
    let doc = ctx.doc;
    let forward = direction == Direction::Forward;
    let step = direction.delta();

    let line_len = doc.line_len(origin.line);
    let end_col = ctx.behavior.line_end_col(line_len);
    let at_edge = if forward {
        origin.character >= end_col
    } else {
        origin.character <= 1
    };

    let mut anchor = origin;
    if at_edge {
        // 1. Re-anchor on the nearest non-empty line in the scan direction
        let mut l = origin.line as isize + step;
        loop {
            if l < 0 || l as usize >= doc.line_count() {
                trace!("word seek from {origin} ran off the document");
                return None;
            }
            if doc.line_len(l as usize) > 0 {
                break;
            }
            l += step;
        }
        let line = l as usize;
        anchor = if forward {
            Position::new(line, 0)
        } else {
            Position::new(line, doc.line_len(line))
        };
    } else if ctx.behavior == SelectionBehavior::Character {
        // 2. Leave the character under the cursor when its neighbor starts a
        //    different category, so the scan does not re-enter the word the
        //    cursor already sits on. Word-end seeks keep a blank origin: the
        //    scan is about to consume that blank run.
        let line: Vec<char> = doc.line(origin.line).chars().collect();
        let char_at = |col: usize| line.get(col).copied().unwrap_or('\0');
        let current = charset.classify(char_at(origin.character));
        let neighbor_col = (origin.character as isize + step) as usize;
        let neighbor = charset.classify(char_at(neighbor_col));
        if current != neighbor && !(stop_at_end && current == CharClass::Blank) {
            anchor = Position::new(origin.line, neighbor_col);
        }
    }

    // 3. Scan within the anchor's line
    let chars: Vec<char> = doc.line(anchor.line).chars().collect();
    let len = chars.len();
    let class_at = |col: usize| charset.classify(chars[col]);
    let mut col = anchor.character;

    // The column walks caret-style: going forward the scan examines the
    // character at `col`, going backward the one at `col - 1`, so a backward
    // walk already stops on the boundary itself.
    let consume = |col: &mut usize, pred: &dyn Fn(CharClass) -> bool| {
        if forward {
            while *col < len && pred(class_at(*col)) {
                *col += 1;
            }
        } else {
            while *col > 0 && pred(class_at(*col - 1)) {
                *col -= 1;
            }
        }
    };
    let next_class = |col: usize| {
        if forward {
            (col < len).then(|| class_at(col))
        } else {
            (col > 0).then(|| class_at(col - 1))
        }
    };

    if stop_at_end == forward {
        // 4a. Blank run first, then the category run it leads to
        consume(&mut col, &|c| c == CharClass::Blank);
        if let Some(category) = next_class(col) {
            consume(&mut col, &|c| c == category);
        }
    } else {
        // 4b. Category run first (nothing when starting on a blank), then
        //     the trailing blank run
        if let Some(category) = next_class(col) {
            if category != CharClass::Blank {
                consume(&mut col, &|c| c == category);
            }
        }
        consume(&mut col, &|c| c == CharClass::Blank);
    }

    Some(Selection::new(anchor, Position::new(anchor.line, col)))
}

/// Column extents of the word object at a position: category run plus the
/// blank runs an outer object may take.
struct WordSpan {
    line: usize,
    start: usize,
    inner_end: usize,
    outer_start: usize,
    outer_end: usize,
}

fn word_span(ctx: &SeekContext, charset: &CharSet, pos: Position) -> WordSpan {
    let chars: Vec<char> = ctx.doc.line(pos.line).chars().collect();
    let len = chars.len();
    let class_at = |col: usize| charset.classify(chars[col]);

    if len == 0 {
        return WordSpan {
            line: pos.line,
            start: 0,
            inner_end: 0,
            outer_start: 0,
            outer_end: 0,
        };
    }

    let col = pos.character.min(len - 1);
    let category = class_at(col);

    // On a blank, the object is the blank run itself
    if category == CharClass::Blank {
        let mut start = col;
        while start > 0 && class_at(start - 1) == CharClass::Blank {
            start -= 1;
        }
        let mut end = col + 1;
        while end < len && class_at(end) == CharClass::Blank {
            end += 1;
        }
        return WordSpan {
            line: pos.line,
            start,
            inner_end: end,
            outer_start: start,
            outer_end: end,
        };
    }

    let mut start = col;
    while start > 0 && class_at(start - 1) == category {
        start -= 1;
    }
    let mut inner_end = col + 1;
    while inner_end < len && class_at(inner_end) == category {
        inner_end += 1;
    }

    // Outer takes the trailing blank run, or the leading one when no
    // trailing blanks exist
    let mut outer_end = inner_end;
    while outer_end < len && class_at(outer_end) == CharClass::Blank {
        outer_end += 1;
    }
    let mut outer_start = start;
    if outer_end == inner_end {
        while outer_start > 0 && class_at(outer_start - 1) == CharClass::Blank {
            outer_start -= 1;
        }
    }

    WordSpan {
        line: pos.line,
        start,
        inner_end,
        outer_start,
        outer_end,
    }
}

fn whole_with(ctx: &SeekContext, charset: &CharSet, pos: Position, inner: bool) -> Selection {
    let span = word_span(ctx, charset, pos);
    if inner {
        Selection::new(
            Position::new(span.line, span.start),
            Position::new(span.line, span.inner_end),
        )
    } else {
        Selection::new(
            Position::new(span.line, span.outer_start),
            Position::new(span.line, span.outer_end),
        )
    }
}

pub fn whole(ctx: &SeekContext, pos: Position, inner: bool) -> Selection {
    whole_with(ctx, ctx.charset, pos, inner)
}

pub fn start(ctx: &SeekContext, pos: Position, inner: bool) -> Position {
    whole_with(ctx, ctx.charset, pos, inner).anchor
}

pub fn end(ctx: &SeekContext, pos: Position, inner: bool, _known_start: Option<Position>) -> Position {
    whole_with(ctx, ctx.charset, pos, inner).active
}

pub fn whole_big(ctx: &SeekContext, pos: Position, inner: bool) -> Selection {
    whole_with(ctx, &CharSet::non_blank(), pos, inner)
}

pub fn start_big(ctx: &SeekContext, pos: Position, inner: bool) -> Position {
    whole_big(ctx, pos, inner).anchor
}

pub fn end_big(ctx: &SeekContext, pos: Position, inner: bool, _known_start: Option<Position>) -> Position {
    whole_big(ctx, pos, inner).active
}
