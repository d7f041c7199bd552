//! Read-only document view consumed by the seek engine
//!
//! The engine never owns the text it scans. Hosts expose their buffer through
//! the [`Document`] trait; [`TextDocument`] is the owned adapter used at the
//! boundary (and throughout the tests).

/// Read-only line access to a text buffer.
///
/// A document always has at least one line; an empty document is a single
/// empty line. The buffer must not change while a seek call is running.
pub trait Document {
    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Text of line `index`, without its terminator
    fn line(&self, index: usize) -> &str;

    /// Length of line `index` in characters
    fn line_len(&self, index: usize) -> usize {
        self.line(index).chars().count()
    }
}

/// Owned line-based document backing the [`Document`] trait.
///
/// Line lengths are cached in characters so repeated length lookups during a
/// scan stay cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
    lens: Vec<usize>,
}

impl TextDocument {
    /// Create a document from pre-split lines. An empty vector becomes the
    /// single-empty-line document.
    pub fn new(lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        let lens = lines.iter().map(|l| l.chars().count()).collect();
        TextDocument { lines, lens }
    }

    /// Create a document from raw text, splitting on `\n` and stripping a
    /// trailing `\r` from each line (CRLF input)
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        TextDocument::new(lines)
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        TextDocument::from_text(text)
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }

    fn line_len(&self, index: usize) -> usize {
        self.lens[index]
    }
}

/// Check if a line is blank (empty or whitespace-only)
pub fn is_blank_line(doc: &dyn Document, line: usize) -> bool {
    doc.line(line).chars().all(|c| c.is_whitespace())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
