use std::fmt;

use crate::{
    ast::items::Item,
    error::EvalError,
    evaluator::{Environment, Evaluator},
    value::Operand,
};

/// A compiled expression: items in postfix order.
///
/// Built once by [`crate::compile`], immutable afterwards, and safe to
/// evaluate any number of times from any number of threads.
///
/// # Examples
///
/// ```
/// use sprig_lang::{compile, Operand};
/// use std::collections::HashMap;
///
/// let expr = compile("%price * 2").unwrap();
/// assert_eq!(expr.to_string(), "%price 2 *");
///
/// let mut env = HashMap::new();
/// env.insert("price".to_string(), "21".to_string());
/// assert_eq!(expr.evaluate(&env).unwrap().to_text(), "42");
/// assert_eq!(expr.evaluate_unbound().unwrap_err().to_string(),
///            "Invalid operands for '*': expected num, num or string, num; got null, num");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    items: Vec<Item>,
}

impl Expression {
    pub(crate) fn new(source: &str, items: Vec<Item>) -> Self {
        Expression {
            source: source.to_string(),
            items,
        }
    }

    /// The postfix instruction sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The text this expression was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates against `environment`; unbound names yield NULL.
    pub fn evaluate(&self, environment: &dyn Environment) -> Result<Operand, EvalError> {
        Evaluator::new(Some(environment)).evaluate(self)
    }

    /// Evaluates with every variable resolving to NULL.
    pub fn evaluate_unbound(&self) -> Result<Operand, EvalError> {
        Evaluator::new(None).evaluate(self)
    }

    /// Evaluates and returns the natural text of the result, or `None` for NULL.
    pub fn evaluate_to_text(
        &self,
        environment: Option<&dyn Environment>,
    ) -> Result<Option<String>, EvalError> {
        Evaluator::new(environment)
            .evaluate(self)
            .map(Operand::into_text)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
