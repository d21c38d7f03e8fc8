//! Scriptflow - Script interpreter core
//!
//! This crate re-exports all layers of the Scriptflow system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: scriptflow_engine     - Control-flow resolution, dispatch, conditions
//! Layer 2: scriptflow_debug      - Tracing of resolution passes
//! Layer 1: scriptflow_language   - Lexer, block parser, semantic refiner
//! Layer 0: scriptflow_foundation - Core types (CategorizedTable, Keyword, Error)
//! ```

pub use scriptflow_debug as debug;
pub use scriptflow_engine as engine;
pub use scriptflow_foundation as foundation;
pub use scriptflow_language as language;
