/// Compile-time errors.
///
/// Raised while turning expression text into a postfix item sequence:
/// unterminated string literals, unbalanced brackets, unparsable literal
/// tokens and operand-count imbalance.
pub mod syntax_error;
/// Evaluation-time errors.
///
/// Raised while running a compiled expression: operand type mismatches,
/// malformed numeric text, division by zero and numeric overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
