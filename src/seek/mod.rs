//! Text-object seek engine
//!
//! This module centralizes the boundary logic for every selectable text
//! object (words, sentences, paragraphs, indentation blocks, arguments).
//!
//! ## Design
//!
//! Each object kind exposes the same three operations:
//! - **whole** - the full object around a position, as a selection
//! - **start** - the object's start boundary
//! - **end** - the object's end boundary, optionally scanning from a known
//!   start (more reliable than guessing from an interior position)
//!
//! Objects come in two extents: **inner** excludes delimiting whitespace and
//! brackets, **outer** includes a canonical amount of surrounding separator
//! (trailing blank run, one adjacent comma, one more line of context).
//!
//! All operations are pure: they read the borrowed document, compute
//! positions, and hold no state between calls.
//!
//! ## Modules
//!
//! - [`word`] - word boundary scans and the word object
//! - [`sentence`] - sentence boundaries from punctuation and blank lines
//! - [`paragraph`] - paragraph boundaries from blank-line runs
//! - [`indent`] - indentation-block boundaries from per-line indents
//! - [`argument`] - bracket/comma argument boundaries from nesting balance

pub mod argument;
pub mod indent;
pub mod paragraph;
pub mod sentence;
pub mod word;

pub use word::word_boundary;

use crate::charset::CharSet;
use crate::document::Document;
use crate::position::{Position, Selection, SelectionBehavior};

/// Everything a seek operation needs from its caller: the document view,
/// the configured word charset, and the host's cursor model.
pub struct SeekContext<'a> {
    pub doc: &'a dyn Document,
    pub charset: &'a CharSet,
    pub behavior: SelectionBehavior,
}

impl<'a> SeekContext<'a> {
    pub fn new(doc: &'a dyn Document, charset: &'a CharSet, behavior: SelectionBehavior) -> Self {
        SeekContext {
            doc,
            charset,
            behavior,
        }
    }
}

/// The selectable object kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Run of word-charset characters
    Word,
    /// Run of non-blank characters
    BigWord,
    Sentence,
    Paragraph,
    /// Indentation block
    Indent,
    /// Bracket/comma-delimited argument
    Argument,
}

/// Compute the whole object around a position
pub type WholeFn = fn(&SeekContext, Position, bool) -> Selection;
/// Compute the object's start boundary
pub type StartFn = fn(&SeekContext, Position, bool) -> Position;
/// Compute the object's end boundary, optionally from a known start
pub type EndFn = fn(&SeekContext, Position, bool, Option<Position>) -> Position;

/// The uniform operation record backing each object kind
pub struct ObjectOps {
    pub whole: WholeFn,
    pub start: StartFn,
    pub end: EndFn,
}

impl ObjectKind {
    /// Operations for this object kind
    pub fn ops(self) -> &'static ObjectOps {
        const WORD: ObjectOps = ObjectOps {
            whole: word::whole,
            start: word::start,
            end: word::end,
        };
        const BIG_WORD: ObjectOps = ObjectOps {
            whole: word::whole_big,
            start: word::start_big,
            end: word::end_big,
        };
        const SENTENCE: ObjectOps = ObjectOps {
            whole: sentence::whole,
            start: sentence::start,
            end: sentence::end,
        };
        const PARAGRAPH: ObjectOps = ObjectOps {
            whole: paragraph::whole,
            start: paragraph::start,
            end: paragraph::end,
        };
        const INDENT: ObjectOps = ObjectOps {
            whole: indent::whole,
            start: indent::start,
            end: indent::end,
        };
        const ARGUMENT: ObjectOps = ObjectOps {
            whole: argument::whole,
            start: argument::start,
            end: argument::end,
        };

        match self {
            ObjectKind::Word => &WORD,
            ObjectKind::BigWord => &BIG_WORD,
            ObjectKind::Sentence => &SENTENCE,
            ObjectKind::Paragraph => &PARAGRAPH,
            ObjectKind::Indent => &INDENT,
            ObjectKind::Argument => &ARGUMENT,
        }
    }
}

/// Blank test shared by the scanners: whitespace, or the sentinel standing
/// for a line-break slot
pub(crate) fn is_blank_char(c: char) -> bool {
    c == '\0' || c.is_whitespace()
}

/// Character-by-character walk over a document, caching the current line.
///
/// The cursor can sit on the break slot of a line (column == line length),
/// where [`CharCursor::current`] returns the `'\0'` sentinel.
pub(crate) struct CharCursor<'a> {
    doc: &'a dyn Document,
    line: usize,
    col: usize,
    chars: Vec<char>,
}

impl<'a> CharCursor<'a> {
    pub fn new(doc: &'a dyn Document, pos: Position) -> Self {
        let chars: Vec<char> = doc.line(pos.line).chars().collect();
        debug_assert!(pos.character <= chars.len());
        CharCursor {
            doc,
            line: pos.line,
            col: pos.character,
            chars,
        }
    }

    fn load(&mut self) {
        self.chars = self.doc.line(self.line).chars().collect();
    }

    pub fn pos(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Character under the cursor, `'\0'` on a break slot
    pub fn current(&self) -> char {
        self.chars.get(self.col).copied().unwrap_or('\0')
    }

    /// Whether the cursor sits on the line-break slot
    pub fn at_break(&self) -> bool {
        self.col >= self.chars.len()
    }

    /// Character at `col` on the cursor's current line
    pub fn line_char(&self, col: usize) -> char {
        self.chars.get(col).copied().unwrap_or('\0')
    }

    /// Step forward; `false` at the document end
    pub fn advance(&mut self) -> bool {
        if self.col < self.chars.len() {
            self.col += 1;
            true
        } else if self.line + 1 < self.doc.line_count() {
            self.line += 1;
            self.col = 0;
            self.load();
            true
        } else {
            false
        }
    }

    /// Step backward; `false` at the document start
    pub fn retreat(&mut self) -> bool {
        if self.col > 0 {
            self.col -= 1;
            true
        } else if self.line > 0 {
            self.line -= 1;
            self.load();
            self.col = self.chars.len();
            true
        } else {
            false
        }
    }
}
