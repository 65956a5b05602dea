//! Builds expression trees from decoded JSON values.
//!
//! Leaves are JSON numbers or strings. Internal nodes are objects with an
//! `op` field and optional `lhs`/`rhs` operands:
//!
//! ```json
//! {"op": "=", "lhs": {"op": "+", "lhs": "x", "rhs": 3}, "rhs": 10}
//! ```

use crate::error::EquationError;
use crate::keywords::substitute_keywords;
use crate::node::Node;
use crate::operator::Operator;
use serde_json::Value;

/// Options for [`parse_expression`].
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Run the operator-keyword pre-pass over the raw text before decoding.
    pub substitute_keywords: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            substitute_keywords: true,
        }
    }
}

/// Converts a decoded JSON value into an expression tree.
pub fn build(value: &Value) -> Result<Node, EquationError> {
    match value {
        Value::Number(n) => Ok(Node::Leaf(n.to_string())),
        Value::String(s) => Ok(Node::Leaf(s.clone())),
        Value::Object(map) => {
            let op = match map.get("op") {
                Some(Value::String(s)) => {
                    Operator::parse(s).ok_or_else(|| EquationError::UnknownOperator(s.clone()))?
                }
                Some(other) => return Err(EquationError::UnknownOperator(other.to_string())),
                None => return Err(malformed(value)),
            };
            let left = build_operand(map.get("lhs"))?;
            let right = build_operand(map.get("rhs"))?;
            Ok(Node::Branch {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        _ => Err(malformed(value)),
    }
}

// A missing or null operand becomes an absent child.
fn build_operand(value: Option<&Value>) -> Result<Node, EquationError> {
    match value {
        None | Some(Value::Null) => Ok(Node::Absent),
        Some(v) => build(v),
    }
}

fn malformed(value: &Value) -> EquationError {
    EquationError::MalformedExpression(value.to_string())
}

/// Decodes raw text into an expression tree.
pub fn parse_expression(input: &str, options: ParseOptions) -> Result<Node, EquationError> {
    let value: Value = if options.substitute_keywords {
        serde_json::from_str(&substitute_keywords(input))?
    } else {
        serde_json::from_str(input)?
    };
    build(&value)
}
