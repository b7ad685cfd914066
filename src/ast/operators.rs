use crate::{
    builtins::{arithmetic, compare, convert, logic, strings},
    error::EvalError,
    value::Operand,
};

/// Executable body of an operator: takes exactly `arity` operands, in the
/// order they were pushed, and produces one.
pub type Action = fn(&[Operand]) -> Result<Operand, EvalError>;

pub const OPEN_BRACKET: &str = "(";
pub const CLOSE_BRACKET: &str = ")";
pub const COMMA: &str = ",";

/// How many operands an operator takes and from which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    /// `~x`, `abs x`, `toNum(x)`
    Prefix,
    /// Applies to the value already produced
    Postfix,
    /// `x + y`, `pow(x, y)`
    Binary,
    /// `substr(s, a, b)`
    Ternary,
    /// Brackets and comma; only steer parsing
    Grouping,
}

impl Fixity {
    pub fn arity(self) -> usize {
        match self {
            Fixity::Prefix | Fixity::Postfix => 1,
            Fixity::Binary => 2,
            Fixity::Ternary => 3,
            Fixity::Grouping => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    /// Only for operators that never need a tie-break
    None,
}

/// Static descriptor of one supported operator.
pub struct Operator {
    pub literal: &'static str,
    pub fixity: Fixity,
    /// Lower binds tighter. Brackets use sentinel values above every real operator.
    pub priority: u8,
    pub associativity: Associativity,
    action: Option<Action>,
}

pub(crate) const fn op(
    literal: &'static str,
    fixity: Fixity,
    priority: u8,
    associativity: Associativity,
    action: Action,
) -> Operator {
    Operator {
        literal,
        fixity,
        priority,
        associativity,
        action: Some(action),
    }
}

const fn grouping(literal: &'static str, priority: u8) -> Operator {
    Operator {
        literal,
        fixity: Fixity::Grouping,
        priority,
        associativity: Associativity::None,
        action: None,
    }
}

use Associativity::{Left, None as Unassociative};
use Fixity::{Binary, Prefix, Ternary};

/// Every operator the language knows, in registration order.
///
/// Order matters for tokenization: operators are spaced out in this order,
/// so `>=` and `<=` must come before `>` and `<`.
pub static OPERATORS: [Operator; 33] = [
    op("toBool", Prefix, 6, Left, convert::to_bool),
    op("toNum", Prefix, 6, Left, convert::to_num),
    op("toString", Prefix, 6, Left, convert::to_string),
    op("+", Binary, 6, Left, arithmetic::add),
    op("-", Binary, 6, Left, arithmetic::subtract),
    op("*", Binary, 5, Left, arithmetic::multiply),
    op("/", Binary, 5, Left, arithmetic::divide),
    op("rem", Binary, 3, Left, arithmetic::remainder),
    op("pow", Binary, 3, Unassociative, arithmetic::power),
    grouping(OPEN_BRACKET, 100),
    grouping(CLOSE_BRACKET, 200),
    grouping(COMMA, 200),
    op("abs", Prefix, 3, Unassociative, arithmetic::abs),
    op("min", Binary, 3, Left, arithmetic::min),
    op("max", Binary, 3, Left, arithmetic::max),
    op("sig", Prefix, 3, Unassociative, arithmetic::signum),
    op("len", Prefix, 3, Unassociative, strings::length),
    op("substr", Ternary, 3, Unassociative, strings::substr),
    op("left", Binary, 3, Unassociative, strings::left),
    op("right", Binary, 3, Unassociative, strings::right),
    op("trim", Prefix, 3, Unassociative, strings::trim),
    op("startsWith", Binary, 3, Unassociative, strings::starts_with),
    op("endsWith", Binary, 3, Unassociative, strings::ends_with),
    op("contains", Binary, 3, Unassociative, strings::contains),
    op("==", Binary, 9, Left, compare::equal),
    op("!=", Binary, 9, Left, compare::not_equal),
    op(">=", Binary, 8, Left, compare::greater_or_equal),
    op("<=", Binary, 8, Left, compare::less_or_equal),
    op(">", Binary, 8, Left, compare::greater),
    op("<", Binary, 8, Left, compare::less),
    op("&&", Binary, 13, Left, logic::and),
    op("||", Binary, 14, Left, logic::or),
    op("~", Prefix, 12, Unassociative, logic::not),
];

impl Operator {
    /// Finds the operator whose literal is exactly `token`.
    pub fn lookup(token: &str) -> Option<&'static Operator> {
        OPERATORS.iter().find(|op| op.literal == token)
    }

    pub fn open_bracket() -> &'static Operator {
        &OPERATORS[9]
    }

    pub fn arity(&self) -> usize {
        self.fixity.arity()
    }

    pub fn is_open_bracket(&self) -> bool {
        self.literal == OPEN_BRACKET
    }

    /// Whether `top`, sitting on the operator stack, must be emitted before
    /// this operator is pushed.
    pub fn yields_to(&self, top: &Operator) -> bool {
        match self.associativity {
            Associativity::Left => top.priority <= self.priority,
            Associativity::Right | Associativity::None => top.priority < self.priority,
        }
    }

    /// Runs the operator's action on its operands.
    pub fn apply(&self, operands: &[Operand]) -> Result<Operand, EvalError> {
        match self.action {
            Some(action) => action(operands),
            None => Err(EvalError::Internal(format!(
                "'{}' only groups operands and cannot be evaluated",
                self.literal
            ))),
        }
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for Operator {}

impl std::fmt::Debug for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operator")
            .field("literal", &self.literal)
            .field("fixity", &self.fixity)
            .field("priority", &self.priority)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Operator::lookup(">=").map(|op| op.literal), Some(">="));
        assert_eq!(Operator::lookup("pow").map(|op| op.arity()), Some(2));
        assert!(Operator::lookup("po").is_none());
        assert!(Operator::lookup("=").is_none());
    }

    #[test]
    fn test_open_bracket_index() {
        assert!(Operator::open_bracket().is_open_bracket());
        assert_eq!(Operator::open_bracket().fixity, Fixity::Grouping);
    }

    #[test]
    fn test_two_char_relations_registered_first() {
        let position = |literal: &str| OPERATORS.iter().position(|op| op.literal == literal);
        assert!(position(">=") < position(">"));
        assert!(position("<=") < position("<"));
    }

    #[test]
    fn test_literals_are_unique() {
        for (i, a) in OPERATORS.iter().enumerate() {
            for b in &OPERATORS[i + 1..] {
                assert_ne!(a.literal, b.literal);
            }
        }
    }

    #[test]
    fn test_grouping_has_no_action() {
        let err = Operator::lookup(",").unwrap().apply(&[]).unwrap_err();
        assert!(matches!(err, EvalError::Internal(_)));
    }
}
