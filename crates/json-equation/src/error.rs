use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Variable not found: x")]
    VariableNotFound,

    #[error("Variable occurs more than once: x appears {0} times")]
    MultipleOccurrences(usize),

    #[error("Not an equation: root operator is not =")]
    NotAnEquation,

    #[error("Nested equation: = inside an equation side")]
    NestedEquation,

    #[error("Not a number: {0}")]
    NumericParseError(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Missing operand")]
    MissingOperand,

    #[error("Trailing operands: {0} left without an operator")]
    TrailingOperands(usize),
}

impl From<serde_json::Error> for EquationError {
    fn from(e: serde_json::Error) -> Self {
        EquationError::InvalidJson(e.to_string())
    }
}
