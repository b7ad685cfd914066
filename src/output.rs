//! Typed JSON rendering of evaluation results.
//!
//! A result is written as an object carrying both its type tag and its
//! value, so callers can tell the string `"1"` from the number `1` and the
//! absent value from the empty string:
//!
//! ```text
//! {"type":"num","value":2.5}
//! {"type":"string","value":"2.5"}
//! {"type":"bool","value":true}
//! {"type":"null","value":null}
//! ```
//!
//! Numbers are written in plain positional notation straight from the
//! decimal, never through a float, so no precision is lost.
//!
//! # Examples
//!
//! ```
//! use sprig_lang::Operand;
//! use sprig_lang::output::{to_json, to_json_pretty};
//!
//! let value = Operand::string("Ada");
//! assert_eq!(to_json(&value), r#"{"type":"string","value":"Ada"}"#);
//! assert_eq!(to_json_pretty(&value), "{\n  \"type\": \"string\",\n  \"value\": \"Ada\"\n}");
//! ```

use crate::value::Operand;

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Operand) -> String {
        let fields = [
            ("type", format!("\"{}\"", value.operand_type())),
            ("value", self.print_value(value)),
        ];

        if self.pretty {
            let items: Vec<String> = fields
                .iter()
                .map(|(key, json)| format!("{}\"{}\": {}", self.indent(1), key, json))
                .collect();
            format!("{{\n{}\n}}", items.join(",\n"))
        } else {
            let items: Vec<String> = fields
                .iter()
                .map(|(key, json)| format!("\"{key}\":{json}"))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn print_value(&self, value: &Operand) -> String {
        match value {
            Operand::Null => "null".to_string(),
            Operand::Bool(b) => b.to_string(),
            Operand::Num(_) => value.to_text(),
            Operand::Str(s) => format!("\"{}\"", self.escape_string(s)),
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => format!("\\u{:04x}", c as u32).chars().collect(),
                c => vec![c],
            })
            .collect()
    }
}

/// Renders a result as compact typed JSON.
///
/// ```
/// use sprig_lang::{compile, output::to_json};
///
/// let result = compile("10 / 4").unwrap().evaluate_unbound().unwrap();
/// assert_eq!(to_json(&result), r#"{"type":"num","value":2.5}"#);
/// ```
pub fn to_json(value: &Operand) -> String {
    JsonPrinter::new(false).print(value)
}

/// Renders a result as typed JSON indented by two spaces.
pub fn to_json_pretty(value: &Operand) -> String {
    JsonPrinter::new(true).print(value)
}
