//! The closed set of binary operators and their lookup tables.
//!
//! Precedence, inverse and keyword aliases are fixed per operator and
//! answered by `match`, so the tables are immutable and shared freely
//! between threads.

use crate::error::EquationError;
use std::fmt;

/// A binary operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
}

impl Operator {
    /// All operators, in keyword-substitution order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Multiply,
        Operator::Divide,
        Operator::Subtract,
        Operator::Equal,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Equal => "=",
        }
    }

    /// The keyword alias accepted in place of the symbol.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Equal => "equal",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.symbol() == s)
    }

    /// Looks an operator up by symbol or keyword alias.
    pub fn parse(s: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s || op.keyword() == s)
    }

    /// Stack precedence used by the infix to postfix conversion.
    ///
    /// The order is total: `+` < `-` < `*` < `/`. Subtraction binds tighter
    /// than addition and division tighter than multiplication. `=` has no
    /// precedence and is never evaluated.
    pub fn precedence(self) -> Option<u8> {
        match self {
            Operator::Add => Some(1),
            Operator::Subtract => Some(2),
            Operator::Multiply => Some(3),
            Operator::Divide => Some(4),
            Operator::Equal => None,
        }
    }

    /// The operator that undoes this one when moved across `=`.
    pub fn inverse(self) -> Option<Operator> {
        match self {
            Operator::Add => Some(Operator::Subtract),
            Operator::Subtract => Some(Operator::Add),
            Operator::Multiply => Some(Operator::Divide),
            Operator::Divide => Some(Operator::Multiply),
            Operator::Equal => None,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply | Operator::Equal)
    }

    /// Applies the operator to `lhs` and `rhs`, in that order.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EquationError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    Err(EquationError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Operator::Equal => Err(EquationError::UnsupportedOperator(
                self.symbol().to_string(),
            )),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
