use std::fmt;
use std::iter;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use regex::Regex;

/// Largest exponent magnitude accepted in decimal text such as `1e3`.
pub const MAX_EXPONENT: u64 = 1000;

static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?$").expect("valid decimal pattern")
});

/// A typed runtime value produced by literals, variables and operators.
///
/// There are exactly four types and no implicit promotion between them:
///
/// - `Num` holds an arbitrary-precision decimal, always normalized
///   (trailing fractional zeros stripped, so `1.0` and `1` are the same value)
/// - `Str` holds text
/// - `Bool` holds a boolean
/// - `Null` is a type of its own and only equals itself
///
/// # Examples
///
/// ```
/// use sprig_lang::Operand;
/// use bigdecimal::BigDecimal;
///
/// let one = Operand::num("1.0".parse::<BigDecimal>().unwrap());
/// assert_eq!(one, Operand::num(BigDecimal::from(1)));
/// assert_eq!(one.to_text(), "1");
///
/// assert_ne!(Operand::string("1"), one);
/// assert_eq!(Operand::NULL, Operand::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Absence of a value
    Null,

    /// Boolean (true/false)
    Bool(bool),

    /// Decimal number
    Num(BigDecimal),

    /// UTF-8 string
    Str(String),
}

/// The type tag of an [`Operand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandType {
    Num,
    String,
    Bool,
    Null,
}

impl fmt::Display for OperandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperandType::Num => "num",
            OperandType::String => "string",
            OperandType::Bool => "bool",
            OperandType::Null => "null",
        };
        f.write_str(name)
    }
}

impl Operand {
    pub const NULL: Operand = Operand::Null;
    pub const TRUE: Operand = Operand::Bool(true);
    pub const FALSE: Operand = Operand::Bool(false);

    /// Creates a number, normalizing its representation.
    pub fn num(value: BigDecimal) -> Self {
        if value.is_zero() {
            return Operand::Num(BigDecimal::zero());
        }
        Operand::Num(value.normalized())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Operand::Str(value.into())
    }

    pub fn bool(value: bool) -> Self {
        if value { Operand::TRUE } else { Operand::FALSE }
    }

    pub fn operand_type(&self) -> OperandType {
        match self {
            Operand::Null => OperandType::Null,
            Operand::Bool(_) => OperandType::Bool,
            Operand::Num(_) => OperandType::Num,
            Operand::Str(_) => OperandType::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Null)
    }

    pub fn as_num(&self) -> Option<&BigDecimal> {
        match self {
            Operand::Num(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Operand::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Operand::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The natural text form used by string concatenation and `toString`.
    ///
    /// Numbers render in plain positional notation without trailing zeros,
    /// booleans as `true`/`false`, and `Null` as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Operand::Null => String::new(),
            Operand::Bool(b) => b.to_string(),
            Operand::Num(n) => canonical_text(n),
            Operand::Str(s) => s.clone(),
        }
    }

    /// Like [`Operand::to_text`], but `Null` has no text at all.
    pub fn into_text(self) -> Option<String> {
        match self {
            Operand::Null => None,
            Operand::Str(s) => Some(s),
            other => Some(other.to_text()),
        }
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::bool(value)
    }
}

impl From<BigDecimal> for Operand {
    fn from(value: BigDecimal) -> Self {
        Operand::num(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::string(value)
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Str(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Null => f.write_str("null"),
            other => f.write_str(&other.to_text()),
        }
    }
}

/// Plain positional notation, never an exponent.
fn canonical_text(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let (mantissa, scale) = value.normalized().into_bigint_and_exponent();
    let digits = mantissa.magnitude().to_string();
    let shift = scale.unsigned_abs() as usize;

    let mut text = String::with_capacity(digits.len() + shift + 3);
    if mantissa.sign() == Sign::Minus {
        text.push('-');
    }
    if scale <= 0 {
        text.push_str(&digits);
        text.extend(iter::repeat_n('0', shift));
    } else if digits.len() > shift {
        let (whole, fraction) = digits.split_at(digits.len() - shift);
        text.push_str(whole);
        text.push('.');
        text.push_str(fraction);
    } else {
        text.push_str("0.");
        text.extend(iter::repeat_n('0', shift - digits.len()));
        text.push_str(&digits);
    }
    text
}

/// Parses decimal text such as `12`, `-0.5`, `.5`, `2.` or `1e3`.
///
/// Any number of digits is accepted. Returns `None` for anything else,
/// including exponents larger than [`MAX_EXPONENT`].
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let caps = DECIMAL_PATTERN.captures(text)?;
    let negative = &caps[1] == "-";
    let integer = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let exponent: i64 = match caps.get(4) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return None;
    }

    let magnitude: BigInt = [integer, fraction].concat().parse().ok()?;
    let mantissa = if negative { -magnitude } else { magnitude };
    let scale = i64::try_from(fraction.len()).ok()? - exponent;
    Some(BigDecimal::new(mantissa, scale))
}

/// Whether a raw token reads as a decimal number.
pub fn is_numeric(text: &str) -> bool {
    DECIMAL_PATTERN
        .captures(text)
        .is_some_and(|caps| !caps[2].is_empty() || caps.get(3).is_some_and(|m| !m.is_empty()))
}

/// Text-to-boolean rule shared by `?` variables and `toBool`.
pub fn parse_bool_text(text: &str) -> bool {
    text == "1" || text.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigDecimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_decimal("12"), Some(dec("12")));
        assert_eq!(parse_decimal("-0.5"), Some(dec("-0.5")));
        assert_eq!(parse_decimal(".5"), Some(dec("0.5")));
        assert_eq!(parse_decimal("2."), Some(dec("2")));
        assert_eq!(parse_decimal("+7"), Some(dec("7")));
        assert_eq!(parse_decimal("1e3"), Some(dec("1000")));
        assert_eq!(parse_decimal("25E-2"), Some(dec("0.25")));
    }

    #[test]
    fn test_parse_decimal_keeps_every_digit() {
        let wide = "123456789012345678901234567890.123456789012345678901234567890";
        let value = Operand::num(parse_decimal(wide).unwrap());
        assert_eq!(value.to_text(), "123456789012345678901234567890.12345678901234567890123456789");
        assert_eq!(parse_decimal("1e999").map(|n| Operand::num(n).to_text().len()), Some(1000));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        for text in ["", ".", "-", "abc", "1.2.3", "1e", "0x10", " 1", "1_000", "1e1001", "1e99999999999999999999"] {
            assert_eq!(parse_decimal(text), None, "accepted {text:?}");
        }
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("1"));
        assert!(is_numeric("-1.5"));
        assert!(is_numeric(".5"));
        assert!(!is_numeric("-"));
        assert!(!is_numeric("%a"));
        assert!(!is_numeric(")"));
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        let value = Operand::num(dec("1.500"));
        assert_eq!(value.to_text(), "1.5");
        assert_eq!(Operand::num(dec("100")).to_text(), "100");
        assert_eq!(Operand::num(dec("-0.00")).to_text(), "0");
        assert_eq!(Operand::num(dec("-0.0025")).to_text(), "-0.0025");
        assert_eq!(Operand::num(dec("1e30")).to_text(), "1000000000000000000000000000000");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Operand::NULL, Operand::NULL);
        assert_ne!(Operand::NULL, Operand::string(""));
        assert_ne!(Operand::string("1"), Operand::num(BigDecimal::from(1)));
        assert_ne!(Operand::TRUE, Operand::string("true"));
        assert_eq!(Operand::bool(true), Operand::TRUE);
    }

    #[test]
    fn test_text_forms() {
        assert_eq!(Operand::TRUE.to_text(), "true");
        assert_eq!(Operand::NULL.to_text(), "");
        assert_eq!(Operand::NULL.into_text(), None);
        assert_eq!(Operand::string("x").into_text(), Some("x".to_string()));
        assert_eq!(Operand::NULL.to_string(), "null");
    }

    #[test]
    fn test_parse_bool_text() {
        assert!(parse_bool_text("1"));
        assert!(parse_bool_text("TRUE"));
        assert!(parse_bool_text("True"));
        assert!(!parse_bool_text("yes"));
        assert!(!parse_bool_text("0"));
    }
}
