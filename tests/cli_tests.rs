use bigdecimal::BigDecimal;
use sprig_lang::cli::{
    self, CheckOptions, CheckResult, CliError, execute_check, get_doc_category,
};
use sprig_lang::output::to_json;
use sprig_lang::Operand;
use std::error::Error;

fn check(expression: &str, input: Option<&str>, variables: &[&str]) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        expression: expression.to_string(),
        input: input.map(str::to_string),
        variables: variables.iter().map(|v| v.to_string()).collect(),
        syntax_only: false,
    })
}

fn success(result: Result<CheckResult, CliError>) -> Operand {
    match result {
        Ok(CheckResult::Success(value)) => value,
        other => panic!("expected a value, got {other:?}"),
    }
}

#[test]
fn test_variables_from_flags() {
    let value = success(check("%a + %b", None, &["a=1", "b=2"]));
    assert_eq!(value, Operand::num(BigDecimal::from(3)));
}

#[test]
fn test_variables_from_json() {
    let value = success(check(
        "'Hi ' + $name + ', ' + toString(%age + 1)",
        Some(r#"{"name": "Ada", "age": 36}"#),
        &[],
    ));
    assert_eq!(value.to_string(), "Hi Ada, 37");
}

#[test]
fn test_flags_override_json() {
    let value = success(check("%a", Some(r#"{"a": 1}"#), &["a=5"]));
    assert_eq!(value, Operand::num(BigDecimal::from(5)));
}

#[test]
fn test_bare_name_binds_absent() {
    let value = success(check("%a == NULL", Some(r#"{"a": 1}"#), &["a"]));
    assert_eq!(value, Operand::TRUE);
}

#[test]
fn test_json_null_binds_absent() {
    let value = success(check("$a", Some(r#"{"a": null}"#), &[]));
    assert_eq!(value, Operand::NULL);
    assert_eq!(value.to_string(), "null");
}

#[test]
fn test_blank_input_means_no_variables() {
    let value = success(check("$x == NULL", Some("  \n"), &[]));
    assert_eq!(value, Operand::TRUE);
}

#[test]
fn test_syntax_only() {
    let result = execute_check(&CheckOptions {
        expression: "1 + 2 * 3".to_string(),
        syntax_only: true,
        ..Default::default()
    });
    match result {
        Ok(CheckResult::SyntaxValid(expr)) => assert_eq!(expr.to_string(), "1 2 3 * +"),
        other => panic!("expected syntax check, got {other:?}"),
    }
}

#[test]
fn test_syntax_only_skips_input() {
    let result = execute_check(&CheckOptions {
        expression: "%a".to_string(),
        input: Some("not json".to_string()),
        syntax_only: true,
        ..Default::default()
    });
    assert!(matches!(result, Ok(CheckResult::SyntaxValid(_))));
}

#[test]
fn test_error_kinds() {
    assert!(matches!(check("(1", None, &[]), Err(CliError::Syntax(_))));
    assert!(matches!(check("1 / 0", None, &[]), Err(CliError::Eval(_))));
    assert!(matches!(check("1", Some("{"), &[]), Err(CliError::Json(_))));
    assert!(matches!(check("1", Some("[1]"), &[]), Err(CliError::InvalidInput(_))));
    assert!(matches!(check("1", None, &["=3"]), Err(CliError::InvalidBinding(_))));
}

#[test]
fn test_error_messages_chain() {
    let err = check("1 / 0", None, &[]).unwrap_err();
    assert_eq!(err.to_string(), "Evaluation error: Division by zero in '/'");
    assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("Division by zero in '/'"));

    let err = check("1", Some("42"), &[]).unwrap_err();
    assert_eq!(err.to_string(), "Input must be a JSON object of variables, got a number");
    assert!(err.source().is_none());
}

#[test]
fn test_typed_json_output() {
    let value = success(check("toString(10 / 4)", None, &[]));
    assert_eq!(to_json(&value), r#"{"type":"string","value":"2.5"}"#);
}

#[test]
fn test_docs() {
    let overview = cli::get_docs_overview();
    for category in ["syntax", "operators", "functions", "types", "variables"] {
        assert!(overview.contains(category), "{category} missing from overview");
        assert!(get_doc_category(category).is_ok());
    }

    let err = get_doc_category("queries").unwrap_err();
    assert!(err.to_string().contains("sprig docs"));
}

#[test]
fn test_onboarding_mentions_check() {
    assert!(cli::get_onboarding_content().contains("sprig check"));
}
