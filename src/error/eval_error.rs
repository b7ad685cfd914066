#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a compiled expression.
pub enum EvalError {
    /// An operator action received the wrong number of operands.
    WrongArity {
        /// The operator literal.
        operator: &'static str,
        /// The number of operands the operator takes.
        expected: usize,
        /// The number of operands it received.
        found:    usize,
    },
    /// An operator received a type combination outside its domain.
    InvalidOperands {
        /// The operator literal.
        operator: &'static str,
        /// The accepted type combinations.
        expected: &'static str,
        /// The actual type combination, e.g. `num, bool`.
        found:    String,
    },
    /// A count or index operand was not a whole number in range.
    NotAnInteger {
        /// The operator literal.
        operator: &'static str,
        /// The offending value as plain decimal text.
        value:    String,
    },
    /// Text could not be read as a decimal number.
    InvalidNumber {
        /// Where the conversion happened (a variable or `toNum`).
        source: String,
        /// The offending text.
        text:   String,
    },
    /// Division or remainder by zero.
    DivisionByZero {
        /// The operator literal.
        operator: &'static str,
    },
    /// The result would exceed a size limit, such as the largest `pow`
    /// exponent or the longest repeated string.
    TooLarge {
        /// The operator literal.
        operator: &'static str,
    },
    /// The compiled sequence broke its own stack invariant.
    Internal(String),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongArity { operator, expected, found } => {
                write!(f, "Operands for '{operator}' must be {expected}, are {found}")
            },
            Self::InvalidOperands { operator, expected, found } => write!(
                f,
                "Invalid operands for '{operator}': expected {expected}; got {found}"
            ),
            Self::NotAnInteger { operator, value } => {
                write!(f, "'{operator}' requires an integer, got {value}")
            },
            Self::InvalidNumber { source, text } => {
                write!(f, "Cannot convert '{text}' to a number in {source}")
            },
            Self::DivisionByZero { operator } => write!(f, "Division by zero in '{operator}'"),
            Self::TooLarge { operator } => write!(f, "Result of '{operator}' is too large"),
            Self::Internal(message) => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for EvalError {}
