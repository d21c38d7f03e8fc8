//! Integration tests for the block parser
//!
//! Tests grouping of tokens into blocks and statements.

use scriptflow_foundation::ErrorKind;
use scriptflow_language::{Lexer, Parser, parse, parse_strict};

fn rows(source: &str) -> Vec<(String, String)> {
    parse(source)
        .iter()
        .map(|e| (e.category.clone(), e.value.clone()))
        .collect()
}

// =============================================================================
// Blocks
// =============================================================================

#[test]
fn if_else_yields_two_entries() {
    let table = parse("if (x) { cmd1; } else { cmd2; }");
    assert_eq!(table.len(), 2);
    assert_eq!(table.category(0), Some("If"));
    assert!(table.value(0).unwrap().contains("{ cmd1; }"));
    assert_eq!(table.category(1), Some("Else"));
    assert!(table.value(1).unwrap().contains("{ cmd2; }"));
}

#[test]
fn nested_braces_stay_in_outer_block() {
    let table = parse("if (x) { if (y) { a; } }");
    assert_eq!(table.len(), 1);
    assert_eq!(table.category(0), Some("If"));
    assert_eq!(table.value(0), Some("if (x) { if (y) { a; } }"));
}

#[test]
fn nested_else_stays_in_outer_block() {
    let table = parse("if (a) { if (b) { x; } else { y; } } else { z; }");
    assert_eq!(table.len(), 2);
    assert_eq!(table.value(0), Some("if (a) { if (b) { x; } else { y; } }"));
    assert_eq!(table.value(1), Some("else { z; }"));
}

#[test]
fn blocks_across_lines() {
    let table = parse("if (ready)\n{\n  go;\n}\nafter;");
    assert_eq!(table.len(), 2);
    assert_eq!(table.value(0), Some("if (ready) { go; }"));
    assert_eq!(table.value(1), Some("after;"));
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn label_and_goto_round_trip() {
    assert_eq!(
        rows("Label(Start); cmd1; goto(Start);"),
        vec![
            ("Label".to_string(), "Label(Start);".to_string()),
            ("Command".to_string(), "cmd1;".to_string()),
            ("Command".to_string(), "goto(Start);".to_string()),
        ]
    );
}

#[test]
fn mixed_script() {
    let categories: Vec<String> = parse(
        "-- setup\nLabel(top);\nsay(hello world);\nif (done) { stop; }\nelse { goto(top); }\n",
    )
    .iter()
    .map(|e| e.category.clone())
    .collect();
    assert_eq!(categories, vec!["Label", "Command", "If", "Else"]);
}

#[test]
fn parser_over_prelexed_tokens() {
    let tokens = Lexer::tokenize("a; b;");
    let mut parser = Parser::new(&tokens);
    let table = parser.parse();
    assert_eq!(table.len(), 2);
}

// =============================================================================
// Unbalanced Input
// =============================================================================

#[test]
fn lenient_parse_keeps_partial_block() {
    let table = parse("if (x) { a;");
    assert_eq!(table.value(0), Some("if (x) { a;"));
}

#[test]
fn strict_parse_reports_open_brace() {
    let err = parse_strict("if (x) {\n  if (y) { a; }\n").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnbalancedBlock {
            delimiter: '{',
            line: 1,
            column: 8
        }
    );
}

#[test]
fn strict_parse_reports_open_paren() {
    let err = parse_strict("ok;\nsay(a;").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnbalancedBlock {
            delimiter: '(',
            line: 2,
            column: 4
        }
    ));
}

#[test]
fn strict_parse_matches_lenient_when_balanced() {
    let source = "Label(a); if (x) { b; } else { c; } goto(a);";
    assert_eq!(parse_strict(source).unwrap(), parse(source));
}
