//! String operators. Lengths and positions count characters, not bytes.

use bigdecimal::BigDecimal;

use super::{expect_arity, integer, invalid};
use crate::{error::EvalError, value::Operand};

/// `len`: character count, or -1 for NULL.
pub fn length(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<1>("len", operands)? {
        [Operand::Str(s)] => Ok(Operand::num(BigDecimal::from(s.chars().count() as u64))),
        [Operand::Null] => Ok(Operand::num(BigDecimal::from(-1))),
        _ => Err(invalid("len", "string or null", operands)),
    }
}

/// `substr(s, from, to)`: characters in `[from, to)`, both clamped to the string.
pub fn substr(operands: &[Operand]) -> Result<Operand, EvalError> {
    let [text, from, to] = expect_arity::<3>("substr", operands)?;
    let (Operand::Str(_) | Operand::Null, Operand::Num(from), Operand::Num(to)) = (text, from, to) else {
        return Err(invalid("substr", "string or null, num, num", operands));
    };
    let from = integer("substr", from)?;
    let to = integer("substr", to)?;

    let Operand::Str(text) = text else {
        return Ok(Operand::Null);
    };

    let len = char_count(text);
    let start = from.clamp(0, len);
    let end = to.clamp(start, len);
    Ok(Operand::Str(slice(text, start, end)))
}

/// `left(s, n)`: the first `n` characters.
pub fn left(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<2>("left", operands)? {
        [Operand::Str(s), Operand::Num(n)] => {
            let len = char_count(s);
            let count = integer("left", n)?.clamp(0, len);
            Ok(Operand::Str(slice(s, 0, count)))
        }
        _ => Err(invalid("left", "string, num", operands)),
    }
}

/// `right(s, n)`: the last `n` characters.
pub fn right(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<2>("right", operands)? {
        [Operand::Str(s), Operand::Num(n)] => {
            let len = char_count(s);
            let count = integer("right", n)?.clamp(0, len);
            Ok(Operand::Str(slice(s, len - count, len)))
        }
        _ => Err(invalid("right", "string, num", operands)),
    }
}

pub fn trim(operands: &[Operand]) -> Result<Operand, EvalError> {
    match expect_arity::<1>("trim", operands)? {
        [Operand::Str(s)] => Ok(Operand::string(s.trim())),
        [Operand::Null] => Ok(Operand::Null),
        _ => Err(invalid("trim", "string or null", operands)),
    }
}

pub fn starts_with(operands: &[Operand]) -> Result<Operand, EvalError> {
    test_text("startsWith", operands, |s, pattern| s.starts_with(pattern))
}

pub fn ends_with(operands: &[Operand]) -> Result<Operand, EvalError> {
    test_text("endsWith", operands, |s, pattern| s.ends_with(pattern))
}

pub fn contains(operands: &[Operand]) -> Result<Operand, EvalError> {
    test_text("contains", operands, |s, pattern| s.contains(pattern))
}

/// A NULL subject never matches.
fn test_text(
    operator: &'static str,
    operands: &[Operand],
    test: fn(&str, &str) -> bool,
) -> Result<Operand, EvalError> {
    match expect_arity::<2>(operator, operands)? {
        [Operand::Str(s), Operand::Str(pattern)] => Ok(Operand::bool(test(s, pattern))),
        [Operand::Null, Operand::Str(_)] => Ok(Operand::FALSE),
        _ => Err(invalid(operator, "string or null, string", operands)),
    }
}

fn char_count(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}

/// Characters `[start, end)`; callers keep `0 <= start <= end <= len`.
fn slice(s: &str, start: i64, end: i64) -> String {
    let skip = usize::try_from(start).unwrap_or(0);
    let take = usize::try_from(end - start).unwrap_or(0);
    s.chars().skip(skip).take(take).collect()
}
