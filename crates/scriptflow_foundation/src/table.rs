//! Append-only categorized command tables.
//!
//! A [`CategorizedTable`] is the common output shape of the parser, the
//! semantic refiner and the control-flow resolver: an ordered sequence of
//! `(key, category, value)` triples. Keys are assigned at insertion time and
//! strictly increase; insertion order is the semantic order. Categories
//! repeat freely, so the table is never keyed by category.
//!
//! The entries live in an `im` vector, so cloning a table to hand it to a
//! dispatcher is O(1) and leaves the producer's copy untouched.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a [`CategorizedTable`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategorizedEntry {
    /// Sequential key, unique within its table.
    pub key: usize,
    /// Category label, e.g. `Command`, `If`, `IF_2`, `GOTO`.
    pub category: String,
    /// Raw text of the entry.
    pub value: String,
}

impl CategorizedEntry {
    /// Returns true if the category matches `category` ignoring ASCII case.
    #[must_use]
    pub fn is(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

impl fmt::Display for CategorizedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.key, self.category, self.value)
    }
}

/// Append-only ordered table of categorized entries.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategorizedTable {
    entries: im::Vector<CategorizedEntry>,
    next_key: usize,
}

impl CategorizedTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and returns the key assigned to it.
    pub fn push(&mut self, category: impl Into<String>, value: impl Into<String>) -> usize {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push_back(CategorizedEntry {
            key,
            category: category.into(),
            value: value.into(),
        });
        key
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: usize) -> Option<&CategorizedEntry> {
        self.entries
            .binary_search_by_key(&key, |entry| entry.key)
            .ok()
            .and_then(|index| self.entries.get(index))
    }

    /// Returns the category stored under `key`.
    #[must_use]
    pub fn category(&self, key: usize) -> Option<&str> {
        self.get(key).map(|entry| entry.category.as_str())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn value(&self, key: usize) -> Option<&str> {
        self.get(key).map(|entry| entry.value.as_str())
    }

    /// Returns the first entry.
    #[must_use]
    pub fn first(&self) -> Option<&CategorizedEntry> {
        self.entries.front()
    }

    /// Returns the most recently appended entry.
    #[must_use]
    pub fn last(&self) -> Option<&CategorizedEntry> {
        self.entries.back()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CategorizedEntry> {
        self.entries.iter()
    }

    /// Iterates over the entries whose category equals `category` exactly.
    pub fn with_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CategorizedEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Returns true if at least one entry has `category`.
    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.entries.iter().any(|entry| entry.category == category)
    }

    /// Returns the distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(entry.category.as_str());
            }
        }
        seen
    }

    /// Appends every entry of `other`, assigning fresh keys.
    pub fn append(&mut self, other: &CategorizedTable) {
        for entry in other.iter() {
            self.push(entry.category.clone(), entry.value.clone());
        }
    }
}

impl fmt::Debug for CategorizedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl fmt::Display for CategorizedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for CategorizedTable {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (category, value) in iter {
            table.push(category, value);
        }
        table
    }
}

impl<C: Into<String>, V: Into<String>> Extend<(C, V)> for CategorizedTable {
    fn extend<I: IntoIterator<Item = (C, V)>>(&mut self, iter: I) {
        for (category, value) in iter {
            self.push(category, value);
        }
    }
}

impl<'a> IntoIterator for &'a CategorizedTable {
    type Item = &'a CategorizedEntry;
    type IntoIter = im::vector::Iter<'a, CategorizedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
