#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while compiling an expression.
pub enum SyntaxError {
    /// A string literal was opened but never closed.
    UnterminatedLiteral {
        /// Character offset of the opening quote.
        position: usize,
    },
    /// Opening and closing brackets do not pair up.
    UnbalancedBrackets {
        /// Character offset of the unmatched bracket; `None` for a comma
        /// outside any bracket.
        position: Option<usize>,
    },
    /// A token is neither an operator, a keyword, a variable nor a number.
    InvalidLiteral {
        /// The offending token.
        token: String,
    },
    /// An operator appears before enough operands are available for it.
    MissingOperands {
        /// The operator literal.
        operator: &'static str,
    },
    /// The expression does not reduce to exactly one value.
    WrongOperandCount {
        /// How many values the expression would leave behind.
        remaining: i64,
    },
}

impl SyntaxError {
    /// Best-effort character offset of the error in the source text.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnterminatedLiteral { position } => Some(*position),
            Self::UnbalancedBrackets { position } => *position,
            _ => None,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedLiteral { position } => {
                write!(f, "String literal opened at position {position} is not properly closed")
            },
            Self::UnbalancedBrackets { position: Some(position) } => {
                write!(f, "Unbalanced brackets at position {position}")
            },
            Self::UnbalancedBrackets { position: None } => write!(f, "Unbalanced brackets"),
            Self::InvalidLiteral { token } => write!(f, "Invalid numeric value: {token}"),
            Self::MissingOperands { operator } => {
                write!(f, "Wrong number of operands: '{operator}' is missing operands")
            },
            Self::WrongOperandCount { remaining } => write!(
                f,
                "Wrong number of operands: expression yields {remaining} values instead of 1"
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}
