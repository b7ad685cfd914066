//! # Sprig Expression Language - Compiled Form
//!
//! Sprig expressions are never turned into a tree. The compiler produces a
//! flat postfix (reverse-Polish) sequence of [`Item`]s, and that sequence is
//! the execution artifact the evaluator runs.
//!
//! ## Architecture Overview
//!
//! - **[operators]** - The static operator table: literal, fixity, priority,
//!   associativity and action of every supported operator
//! - **[items]** - Instructions (`Literal`, `Variable`, `Operator`) and the
//!   sigil-typed [`Variable`] reference
//! - **[expression]** - The immutable compiled [`Expression`]
//!
//! ## Quick Start
//!
//! ```text
//! toNum(substr($code, 0, 2)) + 1
//! ```
//!
//! compiles to
//!
//! ```text
//! $code 0 2 substr toNum 1 +
//! ```
//!
//! ## Core Concepts
//!
//! ### Variables
//!
//! The sigil fixes how the raw environment text is read:
//!
//! - `%name` → number
//! - `$name` → string
//! - `?name` → boolean (`1` or `true`, any case)
//!
//! A missing variable is always `NULL`, whatever its sigil.
//!
//! ### Operand Count Invariant
//!
//! Literals and variables push one value, an operator pops `arity` values
//! and pushes one. Every compiled expression leaves exactly one value and
//! never underflows; the evaluator relies on it.
pub mod expression;
pub mod items;
pub mod operators;

pub use expression::Expression;
pub use items::{Item, VarType, Variable};
pub use operators::{Associativity, Fixity, Operator, OPERATORS};
