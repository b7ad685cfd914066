//! Operator actions.
//!
//! Each operator in [`crate::ast::OPERATORS`] points at one function here.
//! Actions re-check their own arity and the types of their operands, so
//! they can be called and tested in isolation.

pub mod arithmetic;
pub mod compare;
pub mod convert;
pub mod logic;
pub mod strings;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use crate::{error::EvalError, value::Operand};

/// Significant digits kept by division and negative powers.
pub const DIVISION_PRECISION: u64 = 100;

/// Borrows exactly `N` operands or fails with a `WrongArity` error.
pub(crate) fn expect_arity<'a, const N: usize>(
    operator: &'static str,
    operands: &'a [Operand],
) -> Result<&'a [Operand; N], EvalError> {
    operands.try_into().map_err(|_| EvalError::WrongArity {
        operator,
        expected: N,
        found: operands.len(),
    })
}

/// Type error naming the operator and the actual type combination.
pub(crate) fn invalid(operator: &'static str, expected: &'static str, operands: &[Operand]) -> EvalError {
    let found = operands
        .iter()
        .map(|o| o.operand_type().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    EvalError::InvalidOperands {
        operator,
        expected,
        found,
    }
}

/// Reads a whole number used as a count, index or exponent.
pub(crate) fn integer(operator: &'static str, value: &BigDecimal) -> Result<i64, EvalError> {
    let not_an_integer = || EvalError::NotAnInteger {
        operator,
        value: Operand::num(value.clone()).to_text(),
    };
    if !value.is_integer() {
        return Err(not_an_integer());
    }
    value.to_i64().ok_or_else(not_an_integer)
}

/// Quotient rounded to [`DIVISION_PRECISION`] significant digits.
///
/// The divisor must not be zero.
pub(crate) fn quotient(dividend: &BigDecimal, divisor: &BigDecimal) -> BigDecimal {
    (dividend / divisor).with_prec(DIVISION_PRECISION)
}
