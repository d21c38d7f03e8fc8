//! Control-flow keywords and the keyword table.
//!
//! The four control-flow keywords carry fixed integer ids (`if`=0, `else`=1,
//! `goto`=2, `label`=3). The ids are part of the external contract: keyword
//! tables are stored as `(text, id)` pairs, so the order must never change.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// A control-flow keyword recognized by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    /// `if` (id 0)
    If,
    /// `else` (id 1)
    Else,
    /// `goto` (id 2)
    Goto,
    /// `label` (id 3)
    Label,
}

impl Keyword {
    /// All keywords in id order.
    pub const ALL: [Keyword; 4] = [Self::If, Self::Else, Self::Goto, Self::Label];

    /// Returns the stable id of this keyword.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::If => 0,
            Self::Else => 1,
            Self::Goto => 2,
            Self::Label => 3,
        }
    }

    /// Decodes a keyword from its stable id.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownKeywordId`] for ids outside `0..=3`.
    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.id() == id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownKeywordId(id)))
    }

    /// Returns the canonical lowercase spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::Goto => "goto",
            Self::Label => "label",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps keyword spellings to [`Keyword`]s.
///
/// Lookups are case-insensitive and match the leading word of a command,
/// so `IF(x)`, `goto (top)` and `Label(top)` all classify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordTable {
    words: HashMap<String, Keyword>,
}

impl KeywordTable {
    /// Creates an empty table that recognizes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Builds a table from serialized `(text, id)` pairs.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownKeywordId`] if any id is outside `0..=3`.
    pub fn from_ids<S, I>(pairs: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, u8)>,
    {
        let mut table = Self::empty();
        for (text, id) in pairs {
            table.insert(text.as_ref(), Keyword::from_id(id)?);
        }
        Ok(table)
    }

    /// Registers `text` as a spelling of `keyword`.
    pub fn insert(&mut self, text: &str, keyword: Keyword) {
        self.words.insert(text.to_lowercase(), keyword);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, text: &str, keyword: Keyword) -> Self {
        self.insert(text, keyword);
        self
    }

    /// Returns the number of registered spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no spelling is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up an exact word, ignoring case.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<Keyword> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Classifies a raw command by its leading word.
    ///
    /// Returns `None` ("no keyword") for plain commands.
    #[must_use]
    pub fn classify(&self, command: &str) -> Option<Keyword> {
        let word = leading_word(command);
        if word.is_empty() {
            return None;
        }
        self.get(word)
    }

    /// Returns the `(text, id)` pairs sorted by id, then text.
    #[must_use]
    pub fn to_ids(&self) -> Vec<(String, u8)> {
        let mut pairs: Vec<(String, u8)> = self
            .words
            .iter()
            .map(|(text, keyword)| (text.clone(), keyword.id()))
            .collect();
        pairs.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        pairs
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for keyword in Keyword::ALL {
            table.insert(keyword.as_str(), keyword);
        }
        table
    }
}

/// Returns the run of letters, digits and underscores at the start of
/// `command`, after leading whitespace.
#[must_use]
pub fn leading_word(command: &str) -> &str {
    let trimmed = command.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}
