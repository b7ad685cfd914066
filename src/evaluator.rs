use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use crate::{
    ast::{Expression, Item, VarType, Variable},
    error::EvalError,
    value::{Operand, parse_bool_text, parse_decimal},
};

/// Caller-owned variable bindings, consulted read-only during evaluation.
///
/// A name that is missing and a name bound to "absent" behave the same:
/// both evaluate to NULL.
pub trait Environment {
    /// Raw text bound to `name`, or `None` when absent.
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl Environment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Environment for HashMap<String, Option<String>> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)?.as_deref().map(Cow::Borrowed)
    }
}

impl Environment for HashMap<&str, &str> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(*v))
    }
}

impl Environment for HashMap<&str, Option<&str>> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).copied().flatten().map(Cow::Borrowed)
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Environment for BTreeMap<String, Option<String>> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)?.as_deref().map(Cow::Borrowed)
    }
}

/// JSON object bindings: strings are taken as-is, other scalars by their
/// JSON text, and `null` is absent.
impl Environment for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

/// Stack machine that runs a compiled [`Expression`].
///
/// Holds nothing but a reference to the environment, so one compiled
/// expression can be run by any number of evaluators at once.
///
/// # Examples
///
/// ```
/// use sprig_lang::{compile, Evaluator, Operand};
/// use std::collections::HashMap;
///
/// let expr = compile("(%a == %b) || ((%a + %b) == 1)").unwrap();
/// let env = HashMap::from([("a", "0"), ("b", "1")]);
///
/// let result = Evaluator::new(Some(&env)).evaluate(&expr).unwrap();
/// assert_eq!(result, Operand::TRUE);
/// ```
pub struct Evaluator<'a> {
    environment: Option<&'a dyn Environment>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator; `None` means every variable is absent.
    pub fn new(environment: Option<&'a dyn Environment>) -> Self {
        Evaluator { environment }
    }

    /// Runs the postfix sequence left to right and returns the single value
    /// it leaves behind.
    pub fn evaluate(&self, expression: &Expression) -> Result<Operand, EvalError> {
        let mut stack: Vec<Operand> = Vec::with_capacity(expression.items().len());

        for item in expression.items() {
            match item {
                Item::Literal(operand) => stack.push(operand.clone()),
                Item::Variable(variable) => stack.push(self.resolve(variable)?),
                Item::Operator(op) => {
                    let arity = op.arity();
                    if stack.len() < arity {
                        return Err(EvalError::Internal(format!(
                            "'{}' needs {} operands but only {} are available",
                            op.literal,
                            arity,
                            stack.len()
                        )));
                    }
                    let operands = stack.split_off(stack.len() - arity);
                    stack.push(op.apply(&operands)?);
                }
            }
        }

        // The compiler guarantees exactly one value remains
        match (stack.pop(), stack.is_empty()) {
            (Some(result), true) => Ok(result),
            (result, _) => Err(EvalError::Internal(format!(
                "evaluation left {} values on the stack",
                stack.len() + usize::from(result.is_some())
            ))),
        }
    }

    /// Reads a variable from the environment, coerced by its declared type.
    fn resolve(&self, variable: &Variable) -> Result<Operand, EvalError> {
        let Some(raw) = self
            .environment
            .and_then(|environment| environment.lookup(&variable.name))
        else {
            return Ok(Operand::Null);
        };

        match variable.var_type {
            VarType::String => Ok(Operand::Str(raw.into_owned())),
            VarType::Num => {
                parse_decimal(&raw)
                    .map(Operand::num)
                    .ok_or_else(|| EvalError::InvalidNumber {
                        source: format!("variable {variable}"),
                        text: raw.into_owned(),
                    })
            }
            VarType::Bool => Ok(Operand::bool(parse_bool_text(&raw))),
        }
    }
}
