//! Tracing for Scriptflow resolution passes.
//!
//! This crate provides:
//! - [`Tracer`] - Bounded in-process recording of pass events
//! - [`HumanFormatter`] / [`JsonFormatter`] - Rendering of trace records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
