//! Boolean operators. Both sides of `&&`/`||` are always evaluated.

use super::{expect_arity, invalid};
use crate::{error::EvalError, value::Operand};

pub fn and(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<2>("&&", operands)? {
        [Operand::Bool(a), Operand::Bool(b)] => Ok(Operand::bool(*a && *b)),
        _ => Err(invalid("&&", "bool, bool", operands)),
    }
}

pub fn or(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<2>("||", operands)? {
        [Operand::Bool(a), Operand::Bool(b)] => Ok(Operand::bool(*a || *b)),
        _ => Err(invalid("||", "bool, bool", operands)),
    }
}

/// `~`: logical not.
pub fn not(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<1>("~", operands)? {
        [Operand::Bool(a)] => Ok(Operand::bool(!*a)),
        _ => Err(invalid("~", "bool", operands)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_tables() {
        assert_eq!(and(&[Operand::TRUE, Operand::FALSE]), Ok(Operand::FALSE));
        assert_eq!(and(&[Operand::TRUE, Operand::TRUE]), Ok(Operand::TRUE));
        assert_eq!(or(&[Operand::FALSE, Operand::TRUE]), Ok(Operand::TRUE));
        assert_eq!(or(&[Operand::FALSE, Operand::FALSE]), Ok(Operand::FALSE));
        assert_eq!(not(&[Operand::FALSE]), Ok(Operand::TRUE));
    }

    #[test]
    fn test_no_truthiness() {
        assert!(and(&[Operand::TRUE, Operand::NULL]).is_err());
        assert!(or(&[Operand::string("true"), Operand::TRUE]).is_err());
        assert!(not(&[Operand::NULL]).is_err());
    }
}
