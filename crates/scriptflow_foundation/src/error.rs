//! Error types for the Scriptflow system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Script content never produces a panic: malformed input degrades to
//! `Unknown` tokens or partial blocks, and the remaining failures are
//! carried as values of [`Error`].

use std::fmt;

use thiserror::Error;

/// Result alias used throughout Scriptflow.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Scriptflow operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unbalanced block error.
    #[must_use]
    pub fn unbalanced_block(delimiter: char, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::UnbalancedBlock {
            delimiter,
            line,
            column,
        })
    }

    /// Creates a file not found error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::FileNotFound {
            path: path.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unresolved jump error for the offending `goto` command.
    #[must_use]
    pub fn unresolved_jump(command: impl Into<String>, position: usize) -> Self {
        Self::new(ErrorKind::UnresolvedJump {
            command: command.into(),
            position,
        })
    }

    /// Creates a condition type mismatch error.
    #[must_use]
    pub fn condition_type_mismatch(actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConditionTypeMismatch {
            actual: actual.into(),
        })
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Returns true if this error stops a resolution pass.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnresolvedJump { .. }
                | ErrorKind::FileNotFound { .. }
                | ErrorKind::LimitExceeded(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// A brace block or parenthesized region was still open at end of input.
    #[error("unbalanced block at {line}:{column}: '{delimiter}' is never closed")]
    UnbalancedBlock {
        /// The opening delimiter that was left open.
        delimiter: char,
        /// Line of the opening delimiter (1-indexed).
        line: u32,
        /// Column of the opening delimiter (1-indexed).
        column: u32,
    },

    /// A batch file could not be loaded.
    #[error("file not found: {path} ({reason})")]
    FileNotFound {
        /// The path that was requested.
        path: String,
        /// Why loading failed.
        reason: String,
    },

    /// A `goto` names a label that does not exist in the command list.
    #[error("jump label not found: {command}")]
    UnresolvedJump {
        /// The offending command text.
        command: String,
        /// Position of the command in the split command list.
        position: usize,
    },

    /// A condition command succeeded but did not return a boolean.
    #[error("Expected boolean result in condition, got: {actual}")]
    ConditionTypeMismatch {
        /// Name of the type that was returned instead.
        actual: String,
    },

    /// A serialized keyword table used an id outside `0..=3`.
    #[error("unknown keyword id: {0}")]
    UnknownKeywordId(u8),

    /// Semantic limit exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Maximum commands visited in one resolution pass exceeded.
    MaxSteps {
        /// The configured limit.
        limit: usize,
        /// The command being visited when the limit tripped.
        command: Option<String>,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSteps { limit, command } => {
                write!(f, "max steps ({limit}) exceeded")?;
                if let Some(cmd) = command {
                    write!(f, " at {cmd}")?;
                }
                Ok(())
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file or container name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}
