use std::fmt;

use crate::{ast::operators::Operator, value::Operand};

/// Declared type of a variable, fixed by its sigil at compile time.
///
/// # Examples
/// ```text
/// %price    number
/// $name     string
/// ?active   boolean
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Num,
    String,
    Bool,
}

impl VarType {
    pub fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '%' => Some(VarType::Num),
            '$' => Some(VarType::String),
            '?' => Some(VarType::Bool),
            _ => None,
        }
    }

    pub fn sigil(self) -> char {
        match self {
            VarType::Num => '%',
            VarType::String => '$',
            VarType::Bool => '?',
        }
    }
}

/// A named reference resolved against the environment at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
    pub var_type: VarType,
}

impl Variable {
    pub fn new(name: impl Into<String>, var_type: VarType) -> Self {
        Variable {
            name: name.into(),
            var_type,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.var_type.sigil(), self.name)
    }
}

/// One instruction of a compiled expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Pushes a constant
    Literal(Operand),

    /// Pushes the coerced environment value (or NULL)
    Variable(Variable),

    /// Pops `arity` values and pushes the result of the action
    Operator(&'static Operator),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Literal(Operand::Str(s)) => {
                f.write_str("'")?;
                for c in s.chars() {
                    if c == '\'' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("'")
            }
            Item::Literal(Operand::Null) => f.write_str("NULL"),
            Item::Literal(operand) => write!(f, "{operand}"),
            Item::Variable(variable) => write!(f, "{variable}"),
            Item::Operator(op) => f.write_str(op.literal),
        }
    }
}
