//! Integration tests for Layer 0: Foundation
//!
//! Tests for errors, categorized tables, and keyword tables.

mod errors;
