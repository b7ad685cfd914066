//! Compile sprig expressions and evaluate them against CLI-supplied variables

use std::collections::BTreeMap;

use super::{CliError, json_to_environment};
use crate::{Expression, Operand, VarType, compile};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to compile
    pub expression: String,
    /// JSON object of variables
    pub input: Option<String>,
    /// `NAME=VALUE` or `NAME` bindings, applied over `input`
    pub variables: Vec<String>,
    /// Only compile, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// The expression compiled; carries it for display
    SyntaxValid(Expression),
    /// The expression evaluated to this value
    Success(Operand),
}

/// Splits a `--var` argument into a name and its raw text.
///
/// `NAME` alone binds the name as absent. A leading sigil is accepted and
/// ignored, so `%price=3` and `price=3` bind the same variable.
pub fn parse_binding(binding: &str) -> Result<(String, Option<String>), CliError> {
    let (name, value) = match binding.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (binding, None),
    };

    let name = match name.chars().next() {
        Some(c) if VarType::from_sigil(c).is_some() => &name[c.len_utf8()..],
        _ => name,
    };

    if name.is_empty() {
        return Err(CliError::InvalidBinding(binding.to_string()));
    }
    Ok((name.to_string(), value))
}

/// Execute a sprig check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expression = compile(&options.expression)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid(expression));
    }

    let mut environment = match options.input.as_deref().map(str::trim) {
        Some(json) if !json.is_empty() => {
            let json_value: serde_json::Value = serde_json::from_str(json)?;
            json_to_environment(json_value)?
        }
        _ => BTreeMap::new(),
    };

    for binding in &options.variables {
        let (name, value) = parse_binding(binding)?;
        environment.insert(name, value);
    }

    let result = expression.evaluate(&environment)?;
    Ok(CheckResult::Success(result))
}
