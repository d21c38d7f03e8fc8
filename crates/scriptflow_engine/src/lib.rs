//! Control-flow resolution for Scriptflow.
//!
//! This crate provides:
//! - [`ScriptHandler`] - Resolution of container text and batch files into a
//!   categorized command table, with `if`/`else` depth tracking and
//!   `goto`/`label` jumps
//! - [`CommandDispatcher`] - The host seam that logs and executes plain
//!   commands and receives errors
//! - [`BatchLoader`] - Batch file loading from disk or memory
//! - [`ConditionValidator`] - Tracking of boolean command outcomes
//!
//! Resolution never panics on script text. Failures stop the current pass
//! and are reported through the dispatcher and in the returned
//! [`Resolution`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod command;
pub mod condition;
pub mod config;
pub mod dispatch;
pub mod jump;
pub mod loader;
pub mod resolver;

pub use clause::{Clause, IfElseClause};
pub use command::{split_commands, strip_container, unwrap_parameter};
pub use condition::{CommandOutcome, CommandValue, ConditionResult, ConditionValidator};
pub use config::{DEFAULT_MAX_STEPS, ScriptConfig};
pub use dispatch::{CommandDispatcher, NullDispatcher, RecordingDispatcher};
pub use jump::{find_label_position, jump_parameter, jump_target};
pub use loader::{BatchLoader, FsLoader, MemoryLoader};
pub use resolver::{COMMAND, GOTO, LABEL, Resolution, ScriptHandler, else_category, if_category};
