//! JSON input to variable bindings

use std::collections::BTreeMap;

use super::CliError;

/// Converts a JSON object into variable bindings.
///
/// Strings bind their text, numbers and booleans their JSON text, and
/// `null` binds the name as absent. Nested arrays and objects are bound as
/// their compact JSON text.
pub fn json_to_environment(
    v: serde_json::Value,
) -> Result<BTreeMap<String, Option<String>>, CliError> {
    let obj = match v {
        serde_json::Value::Object(obj) => obj,
        other => return Err(CliError::InvalidInput(json_kind(&other).to_string())),
    };

    Ok(obj
        .into_iter()
        .map(|(k, v)| {
            let text = match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            (k, text)
        })
        .collect())
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
