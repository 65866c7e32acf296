//! End-to-end tests for the form engine using scripted terminals.

use proptest::prelude::*;
use serde_json::json;
use termkit_input::{
    check, Callback, FieldSpec, FieldType, Form, FormError, FormValue, MockTerminal,
};
use termkit_render::ColorChoice;

fn form() -> Form {
    Form::new().color(ColorChoice::Never)
}

#[test]
fn required_field_reprompts_exactly_once() {
    let form = form().field("name", FieldSpec::new("Name").required());
    let terminal = MockTerminal::with_responses(["", "Ada"]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(result.get("name"), Some(&FormValue::from("Ada")));
    assert_eq!(terminal.reads(), 2);
    assert_eq!(
        terminal.transcript(),
        "Name: \nName is required.\nName: Ada\n"
    );
}

#[test]
fn integer_field_rejects_then_accepts() {
    let form = form().field("age", FieldSpec::new("Age").kind(FieldType::Int));
    let terminal = MockTerminal::with_responses(["12a", "12"]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(result.get("age"), Some(&FormValue::Int(12)));
    assert_eq!(terminal.transcript().matches("Age must be an integer.").count(), 1);
}

#[test]
fn float_field_coerces() {
    let form = form().field("price", FieldSpec::new("Price").kind(FieldType::Float));
    let terminal = MockTerminal::with_responses(["cheap", "9.99"]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(result.get("price"), Some(&FormValue::Float(9.99)));
    assert!(terminal.transcript().contains("Price must be a number.\n"));
}

#[test]
fn optional_typed_field_accepts_empty_as_text() {
    let form = form().field("age", FieldSpec::new("Age").kind(FieldType::Int));
    let terminal = MockTerminal::with_responses([""]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(result.get("age"), Some(&FormValue::from("")));
}

#[test]
fn validators_report_in_order() {
    let form = form().field(
        "code",
        FieldSpec::new("Code")
            .required()
            .max_length(3)
            .callback(Callback::new(|s| s.starts_with('X')).message("Codes start with X.")),
    );
    let terminal = MockTerminal::with_responses(["", "XYZW", "ABC", "XYZ"]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(result.get("code"), Some(&FormValue::from("XYZ")));
    let transcript = terminal.transcript();
    let required = transcript.find("Code is required.").unwrap();
    let too_long = transcript.find("Code must be at most 3 characters.").unwrap();
    let callback = transcript.find("Codes start with X.").unwrap();
    assert!(required < too_long && too_long < callback);
}

#[test]
fn results_follow_field_order() {
    let form = form()
        .field("last", "Last name")
        .field("first", "First name")
        .field("age", FieldSpec::new("Age").kind(FieldType::Int));
    let terminal = MockTerminal::with_responses(["Lovelace", "Ada", "36"]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"last":"Lovelace","first":"Ada","age":36}"#
    );
}

#[test]
fn config_driven_form() {
    let form = Form::from_json(
        r#"{
            "name": "Name",
            "country": {"label": "Country", "default": "PT", "validators": {"length": 2}},
            "zip": {"validators": {"required": true, "type": "int"}}
        }"#,
    )
    .unwrap()
    .color(ColorChoice::Never)
    .prompt_prefix("    -> ");
    let terminal = MockTerminal::with_responses(["Ada", "", "", "1000"]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(
        result.to_json(),
        json!({"name": "Ada", "country": "PT", "zip": 1000})
    );
    let transcript = terminal.transcript();
    assert!(transcript.contains("    -> Country (default: PT): "));
    assert!(transcript.contains("zip is required.\n"));
}

#[test]
fn undecodable_input_is_rejected_not_fatal() {
    let form = form().field("age", FieldSpec::new("Age").kind(FieldType::Int));
    let terminal = MockTerminal::with_responses(["4\u{FFFD}2", "42"]);

    let result = form.run_with(&terminal).unwrap();

    assert_eq!(result.get("age"), Some(&FormValue::Int(42)));
    assert!(terminal.transcript().contains("Age must be an integer.\n"));
}

#[test]
fn closed_input_cancels_the_form() {
    let form = form().field("name", FieldSpec::new("Name").required());
    let terminal = MockTerminal::with_responses([""]);

    let err = form.run_with(&terminal).unwrap_err();

    assert!(matches!(err, FormError::Cancelled { ref field } if field == "name"));
}

#[test]
fn invalid_config_fails_before_prompting() {
    let err = Form::from_config(&json!({
        "a": "A",
        "b": {"validators": {"type": "date"}}
    }))
    .unwrap_err();

    assert!(matches!(err, FormError::InvalidField { ref field, .. } if field == "b"));
}

proptest! {
    #[test]
    fn length_limit_matches_byte_count(text in "\\PC{0,12}", max in 0usize..12) {
        let spec = FieldSpec::new("Field").max_length(max);
        let accepted = check(&spec, &text).is_ok();
        prop_assert_eq!(accepted, text.len() <= max);
    }

    #[test]
    fn digit_strings_are_integers(n in 0i64..i64::MAX) {
        let spec = FieldSpec::new("N").kind(FieldType::Int);
        prop_assert_eq!(check(&spec, &n.to_string()), Ok(FormValue::Int(n)));
    }
}
