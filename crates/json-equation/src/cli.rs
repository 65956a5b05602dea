//! Text-in, text-out operations used by the `json-equation` binary.
//!
//! - `render_expression`: infix form of the expression as given
//! - `isolate_expression`: infix form of the equation rearranged for `x`
//! - `solve_equation`: numeric value of `x`
//! - `evaluate_infix`: numeric value of a raw infix string

use crate::build::{parse_expression, ParseOptions};
use crate::error::EquationError;
use crate::eval::evaluate;
use crate::format::format_expression;
use crate::isolate::isolate;
use crate::node::Node;
use crate::render::render;
use log::debug;

/// Formats an evaluation result the way every operation prints numbers.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Renders the expression described by `input` in infix form.
pub fn render_expression(input: &str, options: ParseOptions) -> Result<String, EquationError> {
    let tree = parse_expression(input, options)?;
    let rendered = render(&tree);
    debug!("rendered: {}", rendered);
    Ok(format_expression(&rendered))
}

/// Rearranges the equation described by `input` so `x` stands alone.
pub fn isolate_expression(input: &str, options: ParseOptions) -> Result<String, EquationError> {
    let tree = isolate(parse_expression(input, options)?)?;
    let rendered = render(&tree);
    debug!("isolated: {}", rendered);
    Ok(format_expression(&rendered))
}

/// Solves the equation described by `input` for `x`.
///
/// The side opposite `x` is rendered to infix and evaluated.
pub fn solve_equation(input: &str, options: ParseOptions) -> Result<String, EquationError> {
    let tree = isolate(parse_expression(input, options)?)?;
    let side = solved_side(&tree).ok_or(EquationError::VariableNotFound)?;
    let infix = render(side);
    debug!("solving: x = {}", infix);
    let value = evaluate(&infix)?;
    Ok(format_number(value))
}

/// Evaluates a raw space-separated infix expression.
pub fn evaluate_infix(input: &str) -> Result<String, EquationError> {
    evaluate(input).map(format_number)
}

// The child of an isolated equation that is not the variable.
fn solved_side(root: &Node) -> Option<&Node> {
    let (left, right) = root.children()?;
    if left.is_variable() {
        Some(right)
    } else if right.is_variable() {
        Some(left)
    } else {
        None
    }
}
