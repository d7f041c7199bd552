//! Coordinate types and coordinate-safe stepping
//!
//! Every seek component works in (line, character) coordinates. A position
//! whose character equals the line length sits on the implicit line-break
//! slot; stepping across it wraps to the adjacent line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::Document;

/// A location in a document, ordered lexicographically by (line, character)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based line index
    pub line: usize,
    /// Zero-based character offset; equal to the line length on the
    /// line-break slot
    pub character: usize,
}

impl Position {
    pub const fn new(line: usize, character: usize) -> Self {
        Position { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Scan direction, usable as an arithmetic step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The step this direction contributes to a line or column index
    pub const fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// How the host places its cursor relative to characters.
///
/// Caret cursors sit between characters, so the last valid column of a line
/// is the line length; Character cursors sit on characters, so it is one
/// less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionBehavior {
    Caret,
    Character,
}

impl SelectionBehavior {
    /// Last usable column of a line with `line_len` characters
    pub fn line_end_col(self, line_len: usize) -> usize {
        match self {
            SelectionBehavior::Caret => line_len,
            SelectionBehavior::Character => line_len.saturating_sub(1),
        }
    }
}

/// A directional selection: `anchor` is the fixed end, `active` the end that
/// moved during the scan that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub const fn new(anchor: Position, active: Position) -> Self {
        Selection { anchor, active }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// The lesser of the two ends
    pub fn min(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The greater of the two ends
    pub fn max(&self) -> Position {
        self.anchor.max(self.active)
    }
}

/// First position of any document
pub const fn document_start() -> Position {
    Position::new(0, 0)
}

/// Last position of `doc` (the break slot of the final line)
pub fn document_end(doc: &dyn Document) -> Position {
    let last = doc.line_count() - 1;
    Position::new(last, doc.line_len(last))
}

/// Step one character forward, wrapping at line boundaries; `None` at the
/// document end
pub fn advance(doc: &dyn Document, pos: Position) -> Option<Position> {
    if pos.character < doc.line_len(pos.line) {
        Some(Position::new(pos.line, pos.character + 1))
    } else if pos.line + 1 < doc.line_count() {
        Some(Position::new(pos.line + 1, 0))
    } else {
        None
    }
}

/// Step one character backward, wrapping at line boundaries; `None` at the
/// document start
pub fn retreat(doc: &dyn Document, pos: Position) -> Option<Position> {
    if pos.character > 0 {
        Some(Position::new(pos.line, pos.character - 1))
    } else if pos.line > 0 {
        Some(Position::new(pos.line - 1, doc.line_len(pos.line - 1)))
    } else {
        None
    }
}

/// Character at `pos`, or `'\0'` when `pos` sits on a line-break slot
pub fn char_at(doc: &dyn Document, pos: Position) -> char {
    doc.line(pos.line)
        .chars()
        .nth(pos.character)
        .unwrap_or('\0')
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
