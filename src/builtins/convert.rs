//! Explicit conversions: `toBool`, `toNum`, `toString`.
//!
//! These mirror how variables are read from the environment, and accept
//! every type, including NULL.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::expect_arity;
use crate::{
    error::EvalError,
    value::{Operand, parse_bool_text, parse_decimal},
};

/// `toBool`: `"1"`/`"true"` (any case), non-zero numbers; NULL is false.
pub fn to_bool(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [operand] = expect_arity::<1>("toBool", operands)?;
    Ok(match operand {
        Operand::Str(s) => Operand::bool(parse_bool_text(s)),
        Operand::Num(n) => Operand::bool(!n.is_zero()),
        Operand::Bool(_) => operand.clone(),
        Operand::Null => Operand::FALSE,
    })
}

/// `toNum`: parses strings; booleans become 1/0 and NULL becomes 0.
pub fn to_num(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [operand] = expect_arity::<1>("toNum", operands)?;
    match operand {
        Operand::Str(s) => parse_decimal(s)
            .map(Operand::num)
            .ok_or_else(|| EvalError::InvalidNumber {
                source: "toNum".to_string(),
                text: s.clone(),
            }),
        Operand::Num(_) => Ok(operand.clone()),
        Operand::Bool(b) => Ok(Operand::num(BigDecimal::from(u8::from(*b)))),
        Operand::Null => Ok(Operand::num(BigDecimal::from(0))),
    }
}

/// `toString`: the natural text form; NULL becomes the empty string.
pub fn to_string(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [operand] = expect_arity::<1>("toString", operands)?;
    Ok(Operand::Str(operand.to_text()))
}
