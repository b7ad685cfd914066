//! Numeric operators: `+ - * / rem pow abs sig min max`.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use super::{expect_arity, integer, invalid, quotient};
use crate::{error::EvalError, value::Operand};

/// Largest exponent magnitude `pow` accepts.
pub const MAX_POWER: u64 = 10_000;

/// Longest string, in bytes, that repetition may build.
pub const MAX_STRING_BYTES: usize = 1 << 30;

/// `+`: numeric sum, or concatenation when either side is a string.
pub fn add(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("+", operands)?;
    match (left, right) {
        (Operand::Num(a), Operand::Num(b)) => Ok(Operand::num(a + b)),
        (Operand::Str(_), _) | (_, Operand::Str(_)) => {
            Ok(Operand::Str(format!("{}{}", left.to_text(), right.to_text())))
        }
        _ => Err(invalid("+", "num, num or a string on either side", operands)),
    }
}

pub fn subtract(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("-", operands)?;
    match (left, right) {
        (Operand::Num(a), Operand::Num(b)) => Ok(Operand::num(a - b)),
        _ => Err(invalid("-", "num, num", operands)),
    }
}

/// `*`: product, or a string repeated `max(0, n)` times.
pub fn multiply(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("*", operands)?;
    match (left, right) {
        (Operand::Num(a), Operand::Num(b)) => Ok(Operand::num(a * b)),
        (Operand::Str(s), Operand::Num(n)) => repeat(s, integer("*", n)?).map(Operand::Str),
        _ => Err(invalid("*", "num, num or string, num", operands)),
    }
}

pub fn divide(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("/", operands)?;
    match (left, right) {
        (Operand::Num(_), Operand::Num(b)) if b.is_zero() => {
            Err(EvalError::DivisionByZero { operator: "/" })
        }
        (Operand::Num(a), Operand::Num(b)) => Ok(Operand::num(quotient(a, b))),
        _ => Err(invalid("/", "num, num", operands)),
    }
}

/// `rem`: remainder with the sign of the dividend.
pub fn remainder(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("rem", operands)?;
    match (left, right) {
        (Operand::Num(_), Operand::Num(b)) if b.is_zero() => {
            Err(EvalError::DivisionByZero { operator: "rem" })
        }
        (Operand::Num(a), Operand::Num(b)) => Ok(Operand::num(a % b)),
        _ => Err(invalid("rem", "num, num", operands)),
    }
}

/// String repetition. Counts below one give the empty string.
///
/// The result is reserved up front so that an oversized count fails with
/// `TooLarge` instead of aborting on allocation.
fn repeat(text: &str, times: i64) -> Result<String, EvalError> {
    let too_large = || EvalError::TooLarge { operator: "*" };
    let times = usize::try_from(times.max(0)).map_err(|_| too_large())?;
    if text.is_empty() || times == 0 {
        return Ok(String::new());
    }
    let length = text
        .len()
        .checked_mul(times)
        .filter(|&length| length <= MAX_STRING_BYTES)
        .ok_or_else(too_large)?;

    let mut repeated = String::new();
    repeated.try_reserve_exact(length).map_err(|_| too_large())?;
    for _ in 0..times {
        repeated.push_str(text);
    }
    Ok(repeated)
}

/// `pow`: integer exponents only; negative exponents give the reciprocal.
pub fn power(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>("pow", operands)?;
    match (left, right) {
        (Operand::Num(base), Operand::Num(exponent)) => {
            let exponent = integer("pow", exponent)?;
            if exponent.unsigned_abs() > MAX_POWER {
                return Err(EvalError::TooLarge { operator: "pow" });
            }
            if base.is_zero() && exponent < 0 {
                return Err(EvalError::DivisionByZero { operator: "pow" });
            }
            let raised = raise(base, exponent.unsigned_abs());
            if exponent < 0 {
                Ok(Operand::num(quotient(&BigDecimal::one(), &raised)))
            } else {
                Ok(Operand::num(raised))
            }
        }
        _ => Err(invalid("pow", "num, num", operands)),
    }
}

/// Exact power by repeated squaring.
fn raise(base: &BigDecimal, mut exponent: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut square = base.normalized();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = &result * &square;
        }
        exponent >>= 1;
        if exponent > 0 {
            square = &square * &square;
        }
    }
    result
}

pub fn abs(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<1>("abs", operands)? {
        [Operand::Num(n)] => Ok(Operand::num(n.abs())),
        _ => Err(invalid("abs", "num", operands)),
    }
}

/// `sig`: -1, 0 or 1.
pub fn signum(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<1>("sig", operands)? {
        [Operand::Num(n)] => {
            let sign = match n.cmp(&BigDecimal::zero()) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            Ok(Operand::num(BigDecimal::from(sign)))
        }
        _ => Err(invalid("sig", "num", operands)),
    }
}

pub fn min(operands: &[Operand]) -> Result<Operand, EvalError> {
    pick("min", Ordering::Less, operands)
}

pub fn max(operands: &[Operand]) -> Result<Operand, EvalError> {
    pick("max", Ordering::Greater, operands)
}

/// Shared body of `min`/`max`. Ties keep the left operand; booleans order
/// `false < true`, which makes `min` an AND and `max` an OR.
fn pick(operator: &'static str, wanted: Ordering, operands: &[Operand]) -> Result<Operand, EvalError> {
    let [left, right] = expect_arity::<2>(operator, operands)?;
    let ordering = match (left, right) {
        (Operand::Null, _) | (_, Operand::Null) => return Ok(Operand::Null),
        (Operand::Num(a), Operand::Num(b)) => a.cmp(b),
        (Operand::Str(a), Operand::Str(b)) => a.cmp(b),
        (Operand::Bool(a), Operand::Bool(b)) => a.cmp(b),
        _ => {
            return Err(invalid(
                operator,
                "two operands of the same type, or a null",
                operands,
            ));
        }
    };
    if ordering == wanted.reverse() {
        Ok(right.clone())
    } else {
        Ok(left.clone())
    }
}
