//! Category labels written by the parser and the semantic refiner.

/// A whole `if` block, condition and body included.
pub const IF: &str = "If";
/// A whole `else` block.
pub const ELSE: &str = "Else";
/// A `label(...)` statement.
pub const LABEL: &str = "Label";
/// Any other statement.
pub const COMMAND: &str = "Command";

/// The condition text extracted from an `If` entry.
pub const IF_CONDITION: &str = "If_Condition";
/// The body text extracted from an `If` entry.
pub const IF_BRANCH: &str = "If_Branch";
/// The body text extracted from an `Else` entry.
pub const ELSE_BRANCH: &str = "Else_Branch";
/// A normalized jump instruction.
pub const GOTO: &str = "Goto";
