//! Tracing system for Scriptflow.
//!
//! Records what a resolution pass did (classifications, dispatched commands,
//! jumps and failures) with zero overhead when disabled. Supports both
//! human-readable and JSON output formats.

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write to stderr.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records resolution events into a bounded buffer.
///
/// The `record` method returns immediately if tracing is off.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_pass: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_pass: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new().with_timestamps(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Sets the current pass number.
    pub fn set_pass(&mut self, pass: u64) {
        self.current_pass = pass;
    }

    /// Returns the current pass number.
    #[must_use]
    pub fn current_pass(&self) -> u64 {
        self.current_pass
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    /// Internal recording logic (called when tracing is enabled).
    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|kind| kind == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_pass, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records a pass start event and makes `pass` current.
    #[inline]
    pub fn pass_start(&mut self, pass: u64, source_len: usize) {
        self.current_pass = pass;
        self.record(TraceEvent::PassStart { pass, source_len });
    }

    /// Records a pass end event.
    #[inline]
    pub fn pass_end(&mut self, entries: usize, halted: bool) {
        self.record(TraceEvent::PassEnd {
            pass: self.current_pass,
            entries,
            halted,
        });
    }

    /// Records a classification.
    #[inline]
    pub fn classified(&mut self, position: usize, category: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::Classified {
                position,
                category: category.to_string(),
            });
        }
    }

    /// Records a plain command dispatch.
    #[inline]
    pub fn plain_command(&mut self, position: usize, command: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::PlainCommand {
                position,
                command: command.to_string(),
            });
        }
    }

    /// Records a successful jump.
    #[inline]
    pub fn jump(&mut self, from: usize, to: usize, label: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::Jump {
                from,
                to,
                label: label.to_string(),
            });
        }
    }

    /// Records a failed jump.
    #[inline]
    pub fn jump_failed(&mut self, position: usize, command: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::JumpFailed {
                position,
                command: command.to_string(),
            });
        }
    }

    /// Records a failed batch load.
    #[inline]
    pub fn batch_load_failed(&mut self, path: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::BatchLoadFailed {
                path: path.to_string(),
            });
        }
    }

    /// Records a block-text parse.
    #[inline]
    pub fn blocks_parsed(&mut self, tokens: usize, entries: usize) {
        self.record(TraceEvent::BlocksParsed { tokens, entries });
    }

    /// Records a condition outcome.
    #[inline]
    pub fn condition_recorded(&mut self, command: &str, outcome: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::ConditionRecorded {
                command: command.to_string(),
                outcome: outcome.to_string(),
            });
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
