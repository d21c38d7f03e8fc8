//! Condition validator tests
//!
//! Tests recording of condition outcomes, type mismatches, and failures.

use scriptflow_engine::{
    CommandOutcome, CommandValue, ConditionResult, ConditionValidator, NullDispatcher,
    ScriptHandler,
};

// =============================================================================
// Outcomes
// =============================================================================

#[test]
fn boolean_outcome_is_stored() {
    let mut validator = ConditionValidator::new();
    let result = validator.observe(&CommandOutcome::success("check", CommandValue::Bool(false)));
    assert_eq!(result, ConditionResult::Value(false));
    assert_eq!(validator.last_result(), Some(false));
    assert_eq!(validator.last_error(), None);
}

#[test]
fn non_boolean_outcome_is_a_mismatch() {
    let mut validator = ConditionValidator::new();
    let cases = [
        (CommandValue::Int(3), "int"),
        (CommandValue::Text("yes".to_string()), "string"),
        (CommandValue::Unit, "null"),
    ];
    for (value, name) in cases {
        let result = validator.observe(&CommandOutcome::success("check", value));
        let expected = format!("Expected boolean result in condition, got: {name}");
        assert_eq!(result, ConditionResult::Error(expected.clone()));
        assert_eq!(validator.last_result(), None);
        assert_eq!(validator.last_error(), Some(expected.as_str()));
    }
}

#[test]
fn failure_clears_last_result() {
    let mut validator = ConditionValidator::new();
    validator.observe(&CommandOutcome::success("check", CommandValue::Bool(true)));
    let result = validator.observe(&CommandOutcome::failure("check", "timed out"));

    assert_eq!(result, ConditionResult::Error("timed out".to_string()));
    assert_eq!(validator.last_result(), None);
    assert_eq!(validator.last_error(), Some("timed out"));
}

#[test]
fn success_clears_last_error() {
    let mut validator = ConditionValidator::new();
    validator.observe(&CommandOutcome::failure("check", "boom"));
    validator.observe(&CommandOutcome::success("check", CommandValue::Bool(true)));
    assert_eq!(validator.last_result(), Some(true));
    assert_eq!(validator.last_error(), None);
}

#[test]
fn outcomes_are_recorded_in_order() {
    let mut validator = ConditionValidator::new();
    let results: Vec<ConditionResult> = [true, false, true]
        .into_iter()
        .map(|b| validator.observe(&CommandOutcome::success("c", CommandValue::Bool(b))))
        .collect();
    assert_eq!(
        results,
        vec![
            ConditionResult::Value(true),
            ConditionResult::Value(false),
            ConditionResult::Value(true),
        ]
    );
    assert_eq!(validator.last_result(), Some(true));
}

// =============================================================================
// Condition Context
// =============================================================================

#[test]
fn non_condition_commands_are_ignored() {
    let mut validator = ConditionValidator::with_context(|o| o.command.starts_with("test"));
    validator.observe(&CommandOutcome::success("test_door", CommandValue::Bool(true)));
    let result = validator.observe(&CommandOutcome::success("print", CommandValue::Int(1)));

    assert_eq!(result, ConditionResult::NotApplicable);
    assert_eq!(validator.last_result(), Some(true));
}

#[test]
fn reset_clears_state() {
    let mut validator = ConditionValidator::new();
    validator.observe(&CommandOutcome::failure("x", "bad"));
    validator.reset();
    assert_eq!(validator.last_result(), None);
    assert_eq!(validator.last_error(), None);
}

#[test]
fn handler_routes_outcomes_to_its_validator() {
    let mut handler = ScriptHandler::new(NullDispatcher)
        .with_conditions(ConditionValidator::with_context(|o| o.command == "probe"));

    assert_eq!(
        handler.observe(&CommandOutcome::success("other", CommandValue::Bool(true))),
        ConditionResult::NotApplicable
    );
    assert_eq!(
        handler.observe(&CommandOutcome::success("probe", CommandValue::Int(0))),
        ConditionResult::Error("Expected boolean result in condition, got: int".to_string())
    );
    assert_eq!(handler.conditions().last_result(), None);
}
