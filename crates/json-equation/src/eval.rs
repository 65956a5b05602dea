//! Arithmetic evaluation of infix strings and expression trees.
//!
//! Infix input is tokenized on whitespace, reordered to postfix with an
//! operator-precedence stack, then reduced with a value stack. The
//! precedence order is `+` < `-` < `*` < `/` (see
//! [`Operator::precedence`]), so `a * b / c` evaluates as `a * (b / c)`.

use crate::error::EquationError;
use crate::node::Node;
use crate::operator::Operator;
use log::trace;

/// A lexical token of an arithmetic infix expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

/// Splits `infix` on whitespace and classifies each token.
pub fn tokenize(infix: &str) -> Result<Vec<Token>, EquationError> {
    infix
        .split_whitespace()
        .map(|t| match t {
            "(" => Ok(Token::LeftParen),
            ")" => Ok(Token::RightParen),
            _ => match Operator::from_symbol(t) {
                Some(Operator::Equal) => Err(EquationError::UnsupportedOperator(t.to_string())),
                Some(op) => Ok(Token::Operator(op)),
                None => parse_number(t).map(Token::Number),
            },
        })
        .collect()
}

// Rust's float grammar also accepts `inf` and `nan`; those are not literals.
fn parse_number(s: &str) -> Result<f64, EquationError> {
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| EquationError::NumericParseError(s.to_string()))
}

// `=` never reaches the operator stack, so every stacked operator has a
// precedence.
fn binds_at_least(stacked: Operator, incoming: Operator) -> bool {
    stacked.precedence() >= incoming.precedence()
}

/// Reorders infix tokens into postfix order.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EquationError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if !binds_at_least(top, op) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            }
            Token::LeftParen => stack.push(token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(t) => output.push(t),
                    None => return Err(EquationError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LeftParen {
            return Err(EquationError::MismatchedParentheses);
        }
        output.push(token);
    }
    trace!("postfix: {:?}", output);
    Ok(output)
}

/// Reduces a postfix token sequence to a single value.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, EquationError> {
    let mut values: Vec<f64> = Vec::new();
    for token in postfix {
        match *token {
            Token::Number(n) => values.push(n),
            Token::Operator(op) => {
                let op2 = values.pop().ok_or(EquationError::MissingOperand)?;
                let op1 = values.pop().ok_or(EquationError::MissingOperand)?;
                values.push(op.apply(op1, op2)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EquationError::MismatchedParentheses)
            }
        }
    }
    match values.len() {
        0 => Err(EquationError::MissingOperand),
        1 => Ok(values[0]),
        n => Err(EquationError::TrailingOperands(n)),
    }
}

/// Evaluates a space-separated infix arithmetic expression.
pub fn evaluate(infix: &str) -> Result<f64, EquationError> {
    let tokens = tokenize(infix)?;
    trace!("tokens: {:?}", tokens);
    evaluate_postfix(&to_postfix(&tokens)?)
}

/// Evaluates a tree bottom-up without going through infix text.
pub fn evaluate_tree(node: &Node) -> Result<f64, EquationError> {
    match node {
        Node::Absent => Err(EquationError::MissingOperand),
        Node::Leaf(value) => parse_number(value),
        Node::Branch { op, left, right } => {
            if *op == Operator::Equal {
                return Err(EquationError::UnsupportedOperator(op.symbol().to_string()));
            }
            let lhs = evaluate_tree(left)?;
            let rhs = evaluate_tree(right)?;
            op.apply(lhs, rhs)
        }
    }
}
