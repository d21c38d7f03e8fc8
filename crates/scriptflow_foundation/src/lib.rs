//! Core types, categorized command tables, and errors for Scriptflow.
//!
//! This crate provides:
//! - [`CategorizedTable`] - Append-only ordered table of `(key, category, value)` entries
//! - [`Keyword`] / [`KeywordTable`] - Control-flow keywords and their fixed ids
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keyword;
pub mod table;

pub use error::{Error, ErrorContext, ErrorKind, Result, SemanticLimit};
pub use keyword::{Keyword, KeywordTable, leading_word};
pub use table::{CategorizedEntry, CategorizedTable};
