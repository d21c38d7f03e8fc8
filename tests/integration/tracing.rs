//! Tracing integration tests
//!
//! Tests that resolution passes leave a readable trace.

use scriptflow::debug::{TraceEvent, TracerConfig};
use scriptflow::engine::{MemoryLoader, NullDispatcher, ScriptConfig, ScriptHandler};

fn traced() -> ScriptHandler<NullDispatcher> {
    let config = ScriptConfig::new().with_tracer(TracerConfig::new().enabled());
    ScriptHandler::with_config(config, NullDispatcher)
}

#[test]
fn disabled_tracer_records_nothing() {
    let mut handler = ScriptHandler::new(NullDispatcher);
    handler.resolve("a; goto(x)");
    assert!(handler.tracer().buffer().is_empty());
}

#[test]
fn pass_is_bracketed_by_boundaries() {
    let mut handler = traced();
    handler.resolve("a; b");

    let records: Vec<_> = handler.tracer().buffer().iter().collect();
    assert!(records.first().unwrap().event.is_pass_boundary());
    assert!(records.last().unwrap().event.is_pass_boundary());
    assert!(matches!(
        records.last().unwrap().event,
        TraceEvent::PassEnd {
            pass: 1,
            entries: 2,
            halted: false
        }
    ));
}

#[test]
fn failed_jump_is_traced() {
    let mut handler = traced();
    handler.resolve("goto(L404)");

    let buffer = handler.tracer().buffer();
    assert_eq!(buffer.filter(|r| r.event.is_failure()).len(), 2);

    let failures = buffer.filter(|r| r.event.is_jump_event());
    assert_eq!(failures.len(), 1);
    assert!(matches!(
        &failures[0].event,
        TraceEvent::JumpFailed { position: 0, command } if command == "goto(L404)"
    ));
}

#[test]
fn records_are_grouped_by_pass() {
    let mut handler = traced();
    handler.resolve("a");
    handler.resolve("if(x); b");

    let buffer = handler.tracer().buffer();
    assert_eq!(buffer.passes(), vec![1, 2]);
    assert_eq!(buffer.records_for_pass(2).len(), 4);
}

#[test]
fn human_output_shows_jumps() {
    let mut handler = traced();
    handler.resolve("label(L1); goto(L2); label(L2)");

    let tracer = handler.tracer();
    let jumps = tracer.buffer().by_event_type("jump");
    assert_eq!(tracer.format_record(jumps[0]), "P0001   JUMP #1 -> #2 (L2)");
}

#[test]
fn json_output_is_one_object_per_record() {
    let config = ScriptConfig::new().with_tracer(TracerConfig::new().enabled().json());
    let loader = MemoryLoader::new();
    let mut handler = ScriptHandler::with_config(config, NullDispatcher).with_loader(loader);
    let _ = handler.batch_execute("missing.bat");

    let tracer = handler.tracer();
    let records: Vec<_> = tracer.buffer().iter().collect();
    assert_eq!(records.len(), 1);
    let json = tracer.format_record(records[0]);
    assert!(json.starts_with('{') && json.ends_with('}'));
    assert!(json.contains("\"type\":\"batch-load-failed\""));
    assert!(json.contains("\"path\":\"missing.bat\""));
}

#[test]
fn event_filter_limits_recording() {
    let tracer = TracerConfig::new()
        .enabled()
        .filter_events(vec!["plain-command".to_string()]);
    let config = ScriptConfig::new().with_tracer(tracer);
    let mut handler = ScriptHandler::with_config(config, NullDispatcher);
    handler.resolve("a; if(x); b");

    let stats = handler.tracer().stats();
    assert_eq!(stats.record_count, 2);
    assert_eq!(stats.event_counts.get("plain-command"), Some(&2));
}
