pub mod ast;
pub mod builtins;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Expression, Item, Operator, VarType, Variable};
pub use error::{EvalError, SyntaxError};
pub use evaluator::{Environment, Evaluator};
pub use lexer::{Lexer, TokenStream};
pub use output::{to_json, to_json_pretty};
pub use parser::{Parser, compile};
pub use value::{Operand, OperandType};

/// Evaluates a compiled expression; `None` binds no variables at all.
///
/// ```
/// use sprig_lang::{compile, evaluate, Operand};
/// use std::collections::HashMap;
///
/// let expr = compile("$first + ' ' + $last").unwrap();
/// let env = HashMap::from([("first", "Ada"), ("last", "Lovelace")]);
///
/// assert_eq!(evaluate(&expr, Some(&env)).unwrap(), Operand::string("Ada Lovelace"));
/// assert_eq!(evaluate(&expr, None).unwrap(), Operand::string(" "));
/// ```
pub fn evaluate(
    expression: &Expression,
    environment: Option<&dyn Environment>,
) -> Result<Operand, EvalError> {
    Evaluator::new(environment).evaluate(expression)
}

/// Evaluates and renders the result as text; a NULL result is `None`.
///
/// ```
/// use sprig_lang::{compile, evaluate_to_text};
///
/// let expr = compile("toString(10 / 4)").unwrap();
/// assert_eq!(evaluate_to_text(&expr, None).unwrap().as_deref(), Some("2.5"));
///
/// let expr = compile("NULL").unwrap();
/// assert_eq!(evaluate_to_text(&expr, None).unwrap(), None);
/// ```
pub fn evaluate_to_text(
    expression: &Expression,
    environment: Option<&dyn Environment>,
) -> Result<Option<String>, EvalError> {
    expression.evaluate_to_text(environment)
}
