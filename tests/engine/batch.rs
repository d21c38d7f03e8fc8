//! Batch file tests
//!
//! Tests loading batch files from disk and memory and resolving their text.

use std::io::Write;

use scriptflow_engine::{
    BatchLoader, FsLoader, MemoryLoader, RecordingDispatcher, ScriptConfig, ScriptHandler,
};
use scriptflow_foundation::ErrorKind;
use tempfile::NamedTempFile;

fn batch_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// File System
// =============================================================================

#[test]
fn fs_loader_joins_lines() {
    let file = batch_file("say(a);\nsay(b);\n");
    let text = FsLoader.load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(text, "say(a);say(b);");
}

#[test]
fn batch_from_disk() {
    let file = batch_file("label(top);\nif(ready);\nstart;\nelse;\nwait;\n");
    let path = file.path().to_str().unwrap().to_string();

    let mut handler = ScriptHandler::new(RecordingDispatcher::new());
    let resolution = handler.batch_execute(&format!("({path})")).unwrap();

    let categories: Vec<&str> = resolution.table.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(categories, vec!["LABEL", "IF_1", "COMMAND", "ELSE_1", "COMMAND"]);
    assert_eq!(handler.dispatcher().executed, vec!["start", "wait"]);
}

#[test]
fn batch_command_may_span_lines() {
    let file = batch_file("say(\nhello);done");
    let path = file.path().to_str().unwrap().to_string();

    let mut handler = ScriptHandler::new(RecordingDispatcher::new());
    handler.batch_execute(&path).unwrap();
    assert_eq!(handler.dispatcher().executed, vec!["say(hello)", "done"]);
}

#[test]
fn missing_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bat");

    let mut handler = ScriptHandler::new(RecordingDispatcher::new());
    let err = handler
        .batch_execute(&format!("({})", path.display()))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::FileNotFound { .. }));
    assert_eq!(handler.dispatcher().errors, vec![err]);
    assert!(handler.dispatcher().executed.is_empty());
    assert_eq!(handler.passes(), 0);
}

#[test]
fn empty_file_is_not_found() {
    let file = batch_file("\n\n");
    let path = file.path().to_str().unwrap().to_string();

    let mut handler = ScriptHandler::new(RecordingDispatcher::new());
    let err = handler.batch_execute(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FileNotFound { ref reason, .. } if reason == "empty file"));
}

// =============================================================================
// Parameters and Memory
// =============================================================================

#[test]
fn malformed_parameter_is_rejected() {
    let mut handler =
        ScriptHandler::new(RecordingDispatcher::new()).with_loader(MemoryLoader::new());
    let err = handler.batch_execute("(broken.bat").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FileNotFound { ref reason, .. } if reason == "malformed path parameter"));
}

#[test]
fn custom_parameter_markers() {
    let config = ScriptConfig::new().with_param_markers('<', '>');
    let loader = MemoryLoader::new().with("boot.bat", "go");
    let mut handler =
        ScriptHandler::with_config(config, RecordingDispatcher::new()).with_loader(loader);

    handler.batch_execute("<boot.bat>").unwrap();
    assert_eq!(handler.dispatcher().executed, vec!["go"]);
}

#[test]
fn halted_batch_error_carries_path() {
    let loader = MemoryLoader::new().with("loop.bat", "label(a);goto(b)");
    let mut handler = ScriptHandler::new(RecordingDispatcher::new()).with_loader(loader);

    let resolution = handler.batch_execute("loop.bat").unwrap();
    let err = resolution.halted.unwrap();
    assert_eq!(
        err.context.and_then(|c| c.source),
        Some("loop.bat".to_string())
    );
}

#[test]
fn container_and_batch_share_resolution() {
    let loader = MemoryLoader::new().with("same.bat", "a; if(x); b");
    let mut handler = ScriptHandler::new(RecordingDispatcher::new()).with_loader(loader);

    let from_batch = handler.batch_execute("same.bat").unwrap();
    let from_container = handler.command_container("{a; if(x); b}");
    assert_eq!(from_batch.table, from_container.table);
    assert_eq!(handler.passes(), 2);
}
