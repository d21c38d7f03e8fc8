//! Semantic refinement passes over parsed tables.
//!
//! Each pass reads a [`CategorizedTable`] and returns a new one; the input is
//! never modified. The passes chain through [`Refine`]:
//!
//! ```
//! use scriptflow_language::{parse, Refine};
//!
//! let refined = parse("if (ready) { go; }")
//!     .refine_semantic_structure()
//!     .remove_control_statements();
//! assert_eq!(refined.value(0), Some("ready"));
//! assert_eq!(refined.value(1), Some("go"));
//! ```
//!
//! Condition and body extraction are single non-greedy matches. A condition
//! containing `)` or a body containing `}` is cut at the first occurrence, so
//! nested blocks refine only partially. A part that does not match at all
//! comes out as an empty value rather than being dropped.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use scriptflow_foundation::CategorizedTable;

use crate::category;

static CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"if\s*\((.*?)\)")
        .case_insensitive(true)
        .build()
        .expect("condition pattern must compile")
});

static BODY: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\{(.*?)\}")
        .dot_matches_new_line(true)
        .build()
        .expect("body pattern must compile")
});

static LABEL_TARGET: LazyLock<Regex> = LazyLock::new(|| jump_pattern("label"));

static GOTO_TARGET: LazyLock<Regex> = LazyLock::new(|| jump_pattern("goto"));

fn jump_pattern(keyword: &str) -> Regex {
    RegexBuilder::new(&format!(r"\b{keyword}\s*\(\s*(.*?)\s*\)"))
        .case_insensitive(true)
        .build()
        .expect("jump pattern must compile")
}

fn capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Splits `If` entries into condition and branch, and `Else` entries into a
/// branch. Every other entry passes through unchanged, in order.
///
/// An `If` always yields two entries and an `Else` one; a part the pattern
/// does not find is emitted with an empty value.
#[must_use]
pub fn refine_semantic_structure(input: &CategorizedTable) -> CategorizedTable {
    let mut output = CategorizedTable::new();

    for entry in input {
        if entry.is(category::IF) {
            let condition = capture(&CONDITION, &entry.value).unwrap_or_default();
            let body = capture(&BODY, &entry.value).unwrap_or_default();
            output.push(category::IF_CONDITION, condition);
            output.push(category::IF_BRANCH, body);
        } else if entry.is(category::ELSE) {
            let body = capture(&BODY, &entry.value).unwrap_or_default();
            output.push(category::ELSE_BRANCH, body);
        } else {
            output.push(entry.category.clone(), entry.value.clone());
        }
    }

    output
}

/// Trims every value and strips one trailing `;`. Categories are kept.
#[must_use]
pub fn remove_control_statements(input: &CategorizedTable) -> CategorizedTable {
    input
        .iter()
        .map(|entry| {
            let value = entry.value.trim();
            let value = value.strip_suffix(';').unwrap_or(value);
            (entry.category.clone(), value.to_string())
        })
        .collect()
}

/// Rewrites `label` and `goto` entries to their canonical categories with the
/// bare target as value.
///
/// The target is the text inside the first parenthesized argument; when the
/// value has no such argument, the trimmed value is used as is.
#[must_use]
pub fn normalize_jump_targets(input: &CategorizedTable) -> CategorizedTable {
    input
        .iter()
        .map(|entry| {
            let (category, pattern) = if entry.is(category::LABEL) {
                (category::LABEL, &*LABEL_TARGET)
            } else if entry.is(category::GOTO) {
                (category::GOTO, &*GOTO_TARGET)
            } else {
                return (entry.category.clone(), entry.value.clone());
            };
            let target = capture(pattern, &entry.value).unwrap_or_else(|| entry.value.trim());
            (category.to_string(), target.to_string())
        })
        .collect()
}

/// Chainable refinement passes.
pub trait Refine {
    /// See [`refine_semantic_structure`].
    #[must_use]
    fn refine_semantic_structure(&self) -> CategorizedTable;

    /// See [`remove_control_statements`].
    #[must_use]
    fn remove_control_statements(&self) -> CategorizedTable;

    /// See [`normalize_jump_targets`].
    #[must_use]
    fn normalize_jump_targets(&self) -> CategorizedTable;
}

impl Refine for CategorizedTable {
    fn refine_semantic_structure(&self) -> CategorizedTable {
        refine_semantic_structure(self)
    }

    fn remove_control_statements(&self) -> CategorizedTable {
        remove_control_statements(self)
    }

    fn normalize_jump_targets(&self) -> CategorizedTable {
        normalize_jump_targets(self)
    }
}
