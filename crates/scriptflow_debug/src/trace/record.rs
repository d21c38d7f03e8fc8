//! Trace event and record types.
//!
//! This module defines the events that can be traced while a script is
//! parsed and resolved.

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during a resolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A resolution pass has started.
    PassStart {
        /// The pass number.
        pass: u64,
        /// Length of the pass input in bytes.
        source_len: usize,
    },

    /// A resolution pass has ended.
    PassEnd {
        /// The pass number.
        pass: u64,
        /// Number of entries in the resulting table.
        entries: usize,
        /// Whether the pass stopped on a terminal error.
        halted: bool,
    },

    /// A control-flow command was classified into the table.
    Classified {
        /// Position of the command in the split command list.
        position: usize,
        /// The category it was written under, e.g. `IF_2`.
        category: String,
    },

    /// A plain command was handed to the dispatcher.
    PlainCommand {
        /// Position of the command in the split command list.
        position: usize,
        /// The command text.
        command: String,
    },

    /// A `goto` moved the cursor.
    Jump {
        /// Position of the `goto`.
        from: usize,
        /// Position the cursor resumes at.
        to: usize,
        /// The label that was matched.
        label: String,
    },

    /// A `goto` named a label that does not exist.
    JumpFailed {
        /// Position of the `goto`.
        position: usize,
        /// The offending command text.
        command: String,
    },

    /// A batch file could not be loaded.
    BatchLoadFailed {
        /// The requested path.
        path: String,
    },

    /// Block text was lexed and parsed.
    BlocksParsed {
        /// Number of tokens produced by the lexer.
        tokens: usize,
        /// Number of entries after refinement.
        entries: usize,
    },

    /// A condition command outcome was observed.
    ConditionRecorded {
        /// The command text.
        command: String,
        /// Rendered outcome (`true`, `false`, or the error message).
        outcome: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PassStart { .. } => "pass-start",
            Self::PassEnd { .. } => "pass-end",
            Self::Classified { .. } => "classified",
            Self::PlainCommand { .. } => "plain-command",
            Self::Jump { .. } => "jump",
            Self::JumpFailed { .. } => "jump-failed",
            Self::BatchLoadFailed { .. } => "batch-load-failed",
            Self::BlocksParsed { .. } => "blocks-parsed",
            Self::ConditionRecorded { .. } => "condition-recorded",
        }
    }

    /// Returns true if this is a pass boundary event.
    #[must_use]
    pub fn is_pass_boundary(&self) -> bool {
        matches!(self, Self::PassStart { .. } | Self::PassEnd { .. })
    }

    /// Returns true if this event moved or failed to move the cursor.
    #[must_use]
    pub fn is_jump_event(&self) -> bool {
        matches!(self, Self::Jump { .. } | Self::JumpFailed { .. })
    }

    /// Returns true if this event reports a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::JumpFailed { .. } | Self::BatchLoadFailed { .. } | Self::PassEnd { halted: true, .. }
        )
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the tracer.
    pub id: u64,
    /// The pass during which this event occurred.
    pub pass: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, pass: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            pass,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
