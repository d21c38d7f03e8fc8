//! Condition result tracking.
//!
//! A [`ConditionValidator`] is fed the outcome of every executed command and
//! keeps the last boolean result of a condition command, or the reason there
//! is none. Each call returns what it recorded, so callers do not have to
//! read the shared state back.

use std::fmt;

use scriptflow_foundation::Error;

/// A value returned by an executed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandValue {
    /// A boolean result.
    Bool(bool),
    /// An integer result.
    Int(i64),
    /// A text result.
    Text(String),
    /// No result.
    Unit,
}

impl CommandValue {
    /// Returns the name of the value's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "string",
            Self::Unit => "null",
        }
    }
}

/// The outcome of one dispatched command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The command text.
    pub command: String,
    /// The returned value, or the dispatcher's error message.
    pub result: std::result::Result<CommandValue, String>,
}

impl CommandOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub fn success(command: impl Into<String>, value: CommandValue) -> Self {
        Self {
            command: command.into(),
            result: Ok(value),
        }
    }

    /// Creates a failed outcome.
    #[must_use]
    pub fn failure(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            result: Err(message.into()),
        }
    }
}

/// What a validator recorded for one outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConditionResult {
    /// The condition evaluated to this boolean.
    Value(bool),
    /// The condition failed or returned a non-boolean.
    Error(String),
    /// The command is not part of a condition.
    NotApplicable,
}

impl fmt::Display for ConditionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Error(message) => f.write_str(message),
            Self::NotApplicable => f.write_str("n/a"),
        }
    }
}

type ContextPredicate = Box<dyn Fn(&CommandOutcome) -> bool + Send + Sync>;

/// Tracks the last condition result.
///
/// `last_result` and `last_error` are never both set.
pub struct ConditionValidator {
    last_result: Option<bool>,
    last_error: Option<String>,
    is_condition: ContextPredicate,
}

impl ConditionValidator {
    /// Creates a validator that treats every command as a condition.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(|_| true)
    }

    /// Creates a validator that only tracks outcomes accepted by `predicate`.
    #[must_use]
    pub fn with_context<F>(predicate: F) -> Self
    where
        F: Fn(&CommandOutcome) -> bool + Send + Sync + 'static,
    {
        Self {
            last_result: None,
            last_error: None,
            is_condition: Box::new(predicate),
        }
    }

    /// Records a command outcome.
    pub fn observe(&mut self, outcome: &CommandOutcome) -> ConditionResult {
        if !(self.is_condition)(outcome) {
            return ConditionResult::NotApplicable;
        }

        match &outcome.result {
            Err(message) => self.fail(message.clone()),
            Ok(CommandValue::Bool(value)) => {
                self.last_result = Some(*value);
                self.last_error = None;
                ConditionResult::Value(*value)
            }
            Ok(other) => self.fail(Error::condition_type_mismatch(other.type_name()).to_string()),
        }
    }

    fn fail(&mut self, message: String) -> ConditionResult {
        self.last_result = None;
        self.last_error = Some(message.clone());
        ConditionResult::Error(message)
    }

    /// Returns the last boolean result, or `None` if there is none yet or
    /// the last condition failed.
    #[must_use]
    pub fn last_result(&self) -> Option<bool> {
        self.last_result
    }

    /// Returns the message of the last failed condition.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Forgets the last result and error.
    pub fn reset(&mut self) {
        self.last_result = None;
        self.last_error = None;
    }
}

impl Default for ConditionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConditionValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionValidator")
            .field("last_result", &self.last_result)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
