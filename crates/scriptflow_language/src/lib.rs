//! Lexer, block parser, and semantic refiner for Scriptflow scripts.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of script text into [`Token`]s
//! - [`Parser`] - Grouping tokens into a flat table of blocks and statements
//! - [`Refine`] - Passes that split `if`/`else` blocks into condition and
//!   branch entries and normalize separators and jump targets
//!
//! Script text never makes this crate panic or fail in lenient mode; malformed
//! input degrades into `Unknown` tokens and partial blocks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod lexer;
pub mod parser;
pub mod refiner;
pub mod span;
pub mod token;


pub use lexer::Lexer;
pub use parser::{Parser, parse, parse_strict};
pub use refiner::{
    Refine, normalize_jump_targets, refine_semantic_structure, remove_control_statements,
};
pub use span::Span;
pub use token::{Token, TokenKind};
