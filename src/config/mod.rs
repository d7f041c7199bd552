//! Charset and behavior configuration
//!
//! Hosts carry a user-facing configuration (selection behavior, extra word
//! characters, per-language overrides) and build validated [`CharSet`]
//! values from it. Validation is the crate's one recoverable error surface:
//! a word-charset entry that is itself blank is rejected here instead of
//! panicking deep inside a scan.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::CharSet;
use crate::position::SelectionBehavior;

/// Configuration errors surfaced while building charsets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configured word character is whitespace
    #[error("word charset for {language:?} contains blank character {ch:?}")]
    BlankWordChar {
        /// Language the charset belongs to, or "default"
        language: String,
        ch: char,
    },
}

/// User-facing seek configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekConfig {
    /// Cursor model of the hosting editor
    pub selection_behavior: SelectionBehavior,
    /// Word characters beyond alphanumerics (underscore is always included)
    pub word_chars: String,
    /// Per-language overrides of `word_chars`, keyed by language id
    pub language_word_chars: HashMap<String, String>,
}

impl Default for SeekConfig {
    fn default() -> Self {
        SeekConfig {
            selection_behavior: SelectionBehavior::Caret,
            word_chars: String::new(),
            language_word_chars: HashMap::new(),
        }
    }
}

fn build_charset(language: &str, chars: &str) -> Result<CharSet, ConfigError> {
    for ch in chars.chars() {
        if ch == '\0' || ch.is_whitespace() {
            return Err(ConfigError::BlankWordChar {
                language: language.to_string(),
                ch,
            });
        }
    }
    Ok(CharSet::word_with(chars.chars()))
}

impl SeekConfig {
    /// Build the default word charset
    pub fn charset(&self) -> Result<CharSet, ConfigError> {
        build_charset("default", &self.word_chars)
    }

    /// Build the word charset for `language`, falling back to the default
    /// when no override exists
    pub fn charset_for(&self, language: &str) -> Result<CharSet, ConfigError> {
        match self.language_word_chars.get(language) {
            Some(chars) => build_charset(language, chars),
            None => self.charset(),
        }
    }

    /// Validate every configured charset without building them
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.charset()?;
        for language in self.language_word_chars.keys() {
            self.charset_for(language)?;
        }
        Ok(())
    }
}
