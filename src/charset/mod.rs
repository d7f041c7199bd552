//! Character classification for seek operations
//!
//! Every scanner decides where to stop by sorting characters into three
//! categories:
//! - **Blank**: whitespace and the `'\0'` sentinel standing for the
//!   line-break slot
//! - **Word**: whatever the configured word charset matches
//! - **Punctuation**: everything else
//!
//! The word charset is configurable (see [`crate::config`]): `hello_world`
//! is one word with the default charset, while the non-blank charset used
//! for WORD motions treats `foo->bar` as a single word too.

/// Character categories used for boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Characters matched by the word charset
    Word,
    /// Whitespace and the end-of-line sentinel
    Blank,
    /// Everything else (operators, separators, ...)
    Punctuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Alphanumerics, underscore and the configured extras are words
    Word,
    /// Any non-blank character is a word (WORD motions)
    NonBlank,
}

/// A classification of characters into [`CharClass`] categories.
///
/// The word test runs first, so the charset fully determines what counts as
/// a word; blanks and punctuation fall out of the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    mode: Mode,
    extra: Vec<char>,
}

fn is_blank(c: char) -> bool {
    c == '\0' || c.is_whitespace()
}

impl CharSet {
    /// The default word charset: alphanumerics and underscore
    pub fn word() -> Self {
        CharSet {
            mode: Mode::Word,
            extra: vec!['_'],
        }
    }

    /// A word charset with additional word characters.
    ///
    /// # Panics
    /// Panics if any extra character is blank — a charset that classifies
    /// whitespace as Word breaks every scanner and cannot be reasoned about.
    pub fn word_with(extra: impl IntoIterator<Item = char>) -> Self {
        let mut chars = vec!['_'];
        for c in extra {
            assert!(
                !is_blank(c),
                "word charset must not contain the blank character {c:?}"
            );
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        CharSet {
            mode: Mode::Word,
            extra: chars,
        }
    }

    /// The WORD charset: every non-blank character is a word character
    pub fn non_blank() -> Self {
        CharSet {
            mode: Mode::NonBlank,
            extra: Vec::new(),
        }
    }

    /// Check whether `c` belongs to the word category
    pub fn is_word(&self, c: char) -> bool {
        match self.mode {
            Mode::Word => c.is_alphanumeric() || self.extra.contains(&c),
            Mode::NonBlank => !is_blank(c),
        }
    }

    /// Classify a character. Pure and total: every character falls into
    /// exactly one category.
    pub fn classify(&self, c: char) -> CharClass {
        if self.is_word(c) {
            CharClass::Word
        } else if is_blank(c) {
            CharClass::Blank
        } else {
            CharClass::Punctuation
        }
    }
}
