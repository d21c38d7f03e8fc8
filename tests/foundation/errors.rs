//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use scriptflow_foundation::{Error, ErrorContext, ErrorKind, Keyword, SemanticLimit};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unbalanced_block() {
    let err = Error::unbalanced_block('(', 4, 12);
    assert!(matches!(
        err.kind,
        ErrorKind::UnbalancedBlock {
            delimiter: '(',
            line: 4,
            column: 12
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("4:12"));
    assert!(!err.is_terminal());
}

#[test]
fn error_file_not_found() {
    let err = Error::file_not_found("scripts/setup.bat", "permission denied");
    assert!(matches!(err.kind, ErrorKind::FileNotFound { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("scripts/setup.bat"));
    assert!(msg.contains("permission denied"));
    assert!(err.is_terminal());
}

#[test]
fn error_unresolved_jump() {
    let err = Error::unresolved_jump("goto(missing)", 7);
    let msg = format!("{err}");
    assert!(msg.contains("goto(missing)"));
    assert!(err.is_terminal());
}

#[test]
fn error_condition_type_mismatch() {
    let err = Error::condition_type_mismatch("null");
    assert_eq!(
        format!("{err}"),
        "Expected boolean result in condition, got: null"
    );
    assert!(!err.is_terminal());
}

#[test]
fn error_limit_exceeded() {
    let err = Error::limit_exceeded(SemanticLimit::MaxSteps {
        limit: 100,
        command: None,
    });
    assert!(matches!(err.kind, ErrorKind::LimitExceeded(_)));
    assert_eq!(format!("{err}"), "limit exceeded: max steps (100) exceeded");
    assert!(err.is_terminal());
}

#[test]
fn error_unknown_keyword_id() {
    let err = Keyword::from_id(9).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownKeywordId(9));
    assert!(format!("{err}").contains('9'));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_without_source_is_empty() {
    let ctx = ErrorContext::new().with_position(1, 1);
    assert_eq!(ctx.to_string(), "");
}

#[test]
fn context_source_only() {
    let ctx = ErrorContext::new().with_source("main.bat");
    assert_eq!(ctx.to_string(), "at main.bat");
}

#[test]
fn context_does_not_change_kind() {
    let plain = Error::unresolved_jump("goto(x)", 0);
    let with_ctx = plain
        .clone()
        .with_context(ErrorContext::new().with_source("a.bat"));
    assert_eq!(plain.kind, with_ctx.kind);
    assert_ne!(plain, with_ctx);
    assert_eq!(plain.to_string(), with_ctx.to_string());
}
