//! Conditional clause records built during resolution.
//!
//! Each classified `if` or `else` opens a [`Clause`] on the current layer.
//! Commands classified after it are collected into it until the next clause
//! opens. Clauses live only as long as the [`Resolution`](crate::Resolution)
//! that produced them.

use std::fmt;

use scriptflow_foundation::CategorizedTable;

/// One conditional unit at a given nesting layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    /// Sequential id within the pass.
    pub id: usize,
    /// Id of the enclosing `if` clause, or for an `else` the `if` it belongs to.
    pub parent_id: Option<usize>,
    /// Position of the `if`/`else` command in the split command list.
    pub position: usize,
    /// Nesting layer (the `if` depth when the clause was classified).
    pub layer: usize,
    /// True for an `else` clause.
    pub is_else: bool,
    /// True when the clause sits below the outermost layer.
    pub nested: bool,
    /// Entries classified while this clause was the most recent one.
    pub commands: CategorizedTable,
    /// The raw `if`/`else` command text.
    pub input: String,
}

impl Clause {
    /// Pairs every `if` clause with the `else` clause that belongs to it.
    #[must_use]
    pub fn pair(clauses: &[Clause]) -> Vec<IfElseClause> {
        clauses
            .iter()
            .filter(|clause| !clause.is_else)
            .map(|if_clause| {
                let else_clause = clauses
                    .iter()
                    .find(|c| c.is_else && c.parent_id == Some(if_clause.id))
                    .map(|c| c.input.clone());
                IfElseClause {
                    id: if_clause.id,
                    parent: if_clause.parent_id,
                    if_clause: if_clause.input.clone(),
                    else_clause,
                    layer: if_clause.layer,
                }
            })
            .collect()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self
            .parent_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let commands = if self.commands.is_empty() {
            "No commands".to_string()
        } else {
            self.commands
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "Clause {} (parent {parent}) at {}, layer {}, else {}, nested {}, commands [{commands}], input \"{}\"",
            self.id, self.position, self.layer, self.is_else, self.nested, self.input
        )
    }
}

/// An `if` clause paired with its optional `else`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfElseClause {
    /// Id of the `if` clause.
    pub id: usize,
    /// Id of the enclosing `if` clause.
    pub parent: Option<usize>,
    /// The `if` command text.
    pub if_clause: String,
    /// The matching `else` command text, if any.
    pub else_clause: Option<String>,
    /// Nesting layer of the pair.
    pub layer: usize,
}

impl fmt::Display for IfElseClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self
            .parent
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        write!(
            f,
            "Parent: {parent}, IfClause: {}, ElseClause: {}, Layer: {}",
            self.if_clause,
            self.else_clause.as_deref().unwrap_or("-"),
            self.layer
        )
    }
}
