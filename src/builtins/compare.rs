//! Equality and ordering operators.

use std::cmp::Ordering;

use super::{expect_arity, invalid};
use crate::{error::EvalError, value::Operand};

/// `==`: structural equality; values of different types are never equal.
pub fn equal(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("==", operands)?;
    Ok(Operand::bool(left == right))
}

pub fn not_equal(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("!=", operands)?;
    Ok(Operand::bool(left != right))
}

pub fn greater(operands: &[Operand]) -> Result<Operand, EvalError> {
    order(">", operands).map(|o| Operand::bool(o == Ordering::Greater))
}

pub fn less(operands: &[Operand]) -> Result<Operand, EvalError> {
    order("<", operands).map(|o| Operand::bool(o == Ordering::Less))
}

pub fn greater_or_equal(operands: &[Operand]) -> Result<Operand, EvalError> {
    order(">=", operands).map(|o| Operand::bool(o != Ordering::Less))
}

pub fn less_or_equal(operands: &[Operand]) -> Result<Operand, EvalError> {
    order("<=", operands).map(|o| Operand::bool(o != Ordering::Greater))
}

fn order(operator: &'static str, operands: &[Operand]) -> Result<Ordering, EvalError> {
    match expect_arity::<2>(operator, operands)? {
        [Operand::Num(a), Operand::Num(b)] => Ok(a.cmp(b)),
        [Operand::Str(a), Operand::Str(b)] => Ok(a.cmp(b)),
        _ => Err(invalid(operator, "num, num or string, string", operands)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn num(n: i64) -> Operand {
        Operand::num(BigDecimal::from(n))
    }

    #[test]
    fn test_equality_across_types() {
        assert_eq!(equal(&[num(1), Operand::num("1.00".parse().unwrap())]), Ok(Operand::TRUE));
        assert_eq!(equal(&[num(1), Operand::string("1")]), Ok(Operand::FALSE));
        assert_eq!(equal(&[Operand::NULL, Operand::NULL]), Ok(Operand::TRUE));
        assert_eq!(not_equal(&[Operand::NULL, Operand::FALSE]), Ok(Operand::TRUE));
    }

    #[test]
    fn test_long_fractions_stay_distinct() {
        let long = Operand::num("0.12345678901234567890123456789012".parse().unwrap());
        let short = Operand::num("0.12345678901234567890123456789".parse().unwrap());
        assert_eq!(equal(&[long.clone(), short.clone()]), Ok(Operand::FALSE));
        assert_eq!(greater(&[long, short]), Ok(Operand::TRUE));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(less(&[num(-1), num(0)]), Ok(Operand::TRUE));
        assert_eq!(greater_or_equal(&[num(2), num(2)]), Ok(Operand::TRUE));
        assert_eq!(less_or_equal(&[num(3), num(2)]), Ok(Operand::FALSE));
        assert_eq!(
            greater(&[Operand::string("b"), Operand::string("a")]),
            Ok(Operand::TRUE)
        );
    }

    #[test]
    fn test_ordering_rejects_mixed_types() {
        let err = greater(&[num(1), Operand::string("a")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid operands for '>': expected num, num or string, string; got num, string"
        );
        assert!(less(&[Operand::NULL, num(1)]).is_err());
        assert!(less(&[Operand::TRUE, Operand::FALSE]).is_err());
    }
}
