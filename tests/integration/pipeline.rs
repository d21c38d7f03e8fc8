//! End-to-end pipeline tests
//!
//! Tests the front end and the resolver on the same scripts, and the places
//! where they deliberately disagree.

use scriptflow::engine::{RecordingDispatcher, ScriptHandler};
use scriptflow::foundation::{CategorizedTable, Keyword, KeywordTable};
use scriptflow::language::{Lexer, Parser, Refine};

fn categories(table: &CategorizedTable) -> Vec<&str> {
    table.iter().map(|e| e.category.as_str()).collect()
}

// =============================================================================
// Parser vs Resolver Classification
// =============================================================================

#[test]
fn goto_is_a_resolver_keyword_only() {
    let script = "Label(Start); cmd1; goto(Start);";

    let tokens = Lexer::tokenize(script);
    let parsed = Parser::new(&tokens).parse();
    assert_eq!(categories(&parsed), vec!["Label", "Command", "Command"]);
    assert_eq!(parsed.value(2), Some("goto(Start);"));

    let keywords = KeywordTable::default();
    assert_eq!(keywords.classify("goto(Start)"), Some(Keyword::Goto));
}

#[test]
fn resolver_loops_on_the_same_script() {
    let mut handler = ScriptHandler::with_config(
        scriptflow::engine::ScriptConfig::new().with_max_steps(9),
        RecordingDispatcher::new(),
    );
    let resolution = handler.resolve("Label(Start); cmd1; goto(Start);");

    assert_eq!(resolution.visited, vec![0, 1, 2, 1, 2, 1, 2, 1, 2]);
    assert!(!resolution.is_complete());
    assert_eq!(handler.dispatcher().executed, vec!["cmd1"; 4]);
}

#[test]
fn parser_and_refiner_disagree_on_nesting() {
    let script = "if (x) { if (y) { a; } }";
    let mut handler = ScriptHandler::new(RecordingDispatcher::new());

    let parsed = scriptflow::language::parse(script);
    assert_eq!(parsed.value(0), Some(script));

    let refined = handler.parse_blocks(script);
    assert_eq!(refined.value(1), Some("if (y) { a;"));
}

// =============================================================================
// Full Runs
// =============================================================================

#[test]
fn parse_then_resolve_branches() {
    let script = "if (door_open) { enter; } else { knock; }";
    let mut handler = ScriptHandler::new(RecordingDispatcher::new());

    let branches = handler
        .parse_blocks(script)
        .remove_control_statements()
        .normalize_jump_targets();
    assert_eq!(
        categories(&branches),
        vec!["If_Condition", "If_Branch", "Else_Branch"]
    );

    let body = branches.value(1).unwrap().to_string();
    let resolution = handler.resolve(&body);
    assert!(resolution.is_complete());
    assert_eq!(handler.dispatcher().executed, vec!["enter"]);
}

#[test]
fn container_resolution_end_to_end() {
    let mut handler = ScriptHandler::new(RecordingDispatcher::new());
    let resolution = handler.command_container(
        "{ label(top); if(ready); go(1); else; goto(done); skipped; label(done); finish }",
    );

    assert!(resolution.is_complete());
    assert_eq!(
        categories(&resolution.table),
        vec!["LABEL", "IF_1", "COMMAND", "ELSE_1", "GOTO", "COMMAND"]
    );
    assert_eq!(handler.dispatcher().executed, vec!["go(1)", "finish"]);

    let pairs = scriptflow::engine::Clause::pair(&resolution.clauses);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].if_clause, "if(ready)");
    assert_eq!(pairs[0].else_clause.as_deref(), Some("else"));
}
