//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "P{:04} ", record.pass);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::PassStart { pass, source_len } => {
                format!("=== PASS {pass} START ({source_len} bytes) ===")
            }
            TraceEvent::PassEnd {
                pass,
                entries,
                halted,
            } => {
                let status = if *halted { "HALTED" } else { "OK" };
                format!("=== PASS {pass} END ({status}, {entries} entries) ===")
            }
            TraceEvent::Classified { position, category } => {
                format!("  #{position} {category}")
            }
            TraceEvent::PlainCommand { position, command } => {
                format!("  #{position} DISPATCH {command}")
            }
            TraceEvent::Jump { from, to, label } => {
                format!("  JUMP #{from} -> #{to} ({label})")
            }
            TraceEvent::JumpFailed { position, command } => {
                format!("  JUMP FAILED #{position} {command}")
            }
            TraceEvent::BatchLoadFailed { path } => {
                format!("  BATCH FAILED {path}")
            }
            TraceEvent::BlocksParsed { tokens, entries } => {
                format!("  PARSED {tokens} tokens into {entries} entries")
            }
            TraceEvent::ConditionRecorded { command, outcome } => {
                format!("  CONDITION {command} = {outcome}")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to put each record of a list on its own line.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let esc = Self::escape_string;

        let event_data = match &record.event {
            TraceEvent::PassStart { pass, source_len } => {
                format!("\"pass\":{pass},\"source_len\":{source_len}")
            }
            TraceEvent::PassEnd {
                pass,
                entries,
                halted,
            } => {
                format!("\"pass\":{pass},\"entries\":{entries},\"halted\":{halted}")
            }
            TraceEvent::Classified { position, category } => {
                format!("\"position\":{position},\"category\":\"{}\"", esc(category))
            }
            TraceEvent::PlainCommand { position, command }
            | TraceEvent::JumpFailed { position, command } => {
                format!("\"position\":{position},\"command\":\"{}\"", esc(command))
            }
            TraceEvent::Jump { from, to, label } => {
                format!("\"from\":{from},\"to\":{to},\"label\":\"{}\"", esc(label))
            }
            TraceEvent::BatchLoadFailed { path } => {
                format!("\"path\":\"{}\"", esc(path))
            }
            TraceEvent::BlocksParsed { tokens, entries } => {
                format!("\"tokens\":{tokens},\"entries\":{entries}")
            }
            TraceEvent::ConditionRecorded { command, outcome } => {
                format!(
                    "\"command\":\"{}\",\"outcome\":\"{}\"",
                    esc(command),
                    esc(outcome)
                )
            }
        };

        format!(
            "{{\"id\":{},\"pass\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.pass,
            record.timestamp_ns,
            record.event_type(),
            event_data
        )
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
