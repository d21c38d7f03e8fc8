//! Integration tests for the semantic refiner
//!
//! Tests splitting of if/else blocks and the normalization passes.

use scriptflow_foundation::CategorizedTable;
use scriptflow_language::{Refine, parse, refine_semantic_structure};

fn rows(table: &CategorizedTable) -> Vec<(&str, &str)> {
    table
        .iter()
        .map(|e| (e.category.as_str(), e.value.as_str()))
        .collect()
}

// =============================================================================
// Structure Refinement
// =============================================================================

#[test]
fn if_fans_out_into_condition_and_branch() {
    let table = parse("if (count) { tick; }").refine_semantic_structure();
    assert_eq!(
        rows(&table),
        vec![("If_Condition", "count"), ("If_Branch", "tick;")]
    );
    let keys: Vec<usize> = table.iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![0, 1]);
}

#[test]
fn other_entries_keep_category_and_value() {
    let input: CategorizedTable = [
        ("Command", "a;"),
        ("If", "if (x) { b; }"),
        ("Label", "Label(top);"),
        ("anything", "  spaced  "),
    ]
    .into_iter()
    .collect();
    let output = refine_semantic_structure(&input);

    assert_eq!(
        rows(&output),
        vec![
            ("Command", "a;"),
            ("If_Condition", "x"),
            ("If_Branch", "b;"),
            ("Label", "Label(top);"),
            ("anything", "  spaced  "),
        ]
    );
    assert_eq!(output.get(3).map(|e| e.value.as_str()), Some("Label(top);"));
}

#[test]
fn categories_match_ignoring_case() {
    let input: CategorizedTable = [("IF", "if (a) { b; }"), ("else", "else { c; }")]
        .into_iter()
        .collect();
    let output = refine_semantic_structure(&input);
    assert_eq!(
        rows(&output),
        vec![
            ("If_Condition", "a"),
            ("If_Branch", "b;"),
            ("Else_Branch", "c;"),
        ]
    );
}

#[test]
fn nested_body_truncates_at_first_close() {
    let table = parse("if (x) { if (y) { a; } b; }").refine_semantic_structure();
    assert_eq!(table.value(0), Some("x"));
    assert_eq!(table.value(1), Some("if (y) { a;"));
}

#[test]
fn else_without_body_has_empty_branch() {
    let input: CategorizedTable = [("Else", "else")].into_iter().collect();
    let output = refine_semantic_structure(&input);
    assert_eq!(output.len(), 1);
    assert_eq!(output.category(0), Some("Else_Branch"));
    assert_eq!(output.value(0), Some(""));
}

#[test]
fn refined_length_counts_every_if_and_else() {
    let table = parse("if (x) { a; } else { b; } if { c; } d;");
    assert_eq!(table.len(), 4);
    let refined = refine_semantic_structure(&table);
    assert_eq!(
        rows(&refined),
        vec![
            ("If_Condition", "x"),
            ("If_Branch", "a;"),
            ("Else_Branch", "b;"),
            ("If_Condition", ""),
            ("If_Branch", "c;"),
            ("Command", "d;"),
        ]
    );
}

// =============================================================================
// Normalization Passes
// =============================================================================

#[test]
fn full_pipeline() {
    let table = parse("Label(top); if (x) { go; } else { wait; } goto(top);")
        .refine_semantic_structure()
        .remove_control_statements()
        .normalize_jump_targets();

    assert_eq!(
        rows(&table),
        vec![
            ("Label", "top"),
            ("If_Condition", "x"),
            ("If_Branch", "go"),
            ("Else_Branch", "wait"),
            ("Command", "goto(top)"),
        ]
    );
}

#[test]
fn goto_category_is_normalized() {
    let input: CategorizedTable = [("GOTO", "goto( top );")].into_iter().collect();
    let output = input.normalize_jump_targets();
    assert_eq!(rows(&output), vec![("Goto", "top")]);
}
