//! Display formatting of rendered infix strings.
//!
//! The renderer wraps every branch, the root included, in parentheses. This
//! module strips the outermost pair and applies two fixed-offset rewrites
//! that match the output of [`crate::isolate::isolate`] for shallow trees:
//!
//! - `( ( 10 - 3 ) = x )` becomes `x = 10 - 3`
//! - `( x = ( 10 - 3 ) )` becomes `x = 10 - 3`
//!
//! The conditions are positional, not structural. They are exact for the
//! shapes the solver produces and make no attempt to pretty-print anything
//! else.

/// Formats a string produced by [`crate::render::render`].
///
/// Input that is not wrapped in `( ` `)` (a single leaf) is returned as is.
pub fn format_expression(rendered: &str) -> String {
    let Some(inner) = rendered
        .strip_prefix("( ")
        .and_then(|s| s.strip_suffix(" )"))
    else {
        return rendered.to_string();
    };
    variable_first(inner)
        .or_else(|| unwrap_right_side(inner))
        .unwrap_or_else(|| inner.to_string())
}

// `( L ) = x` -> `x = L`. Fires when the string ends with `x`, the character
// two before the first `=` is `)` and the string starts with `(`.
fn variable_first(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    if bytes.last() != Some(&b'x') {
        return None;
    }
    let eq = s.find('=')?;
    if eq < 2 || bytes[eq - 2] != b')' || bytes.first() != Some(&b'(') {
        return None;
    }
    let left = s.get(2..eq - 2)?.trim_end();
    let right = s.get(eq + 1..)?.trim_start();
    Some(format!("{right} = {left}"))
}

// `a = ( R )` -> `a = R`. Fires when byte 4 is `(` and the string ends
// with `)`.
fn unwrap_right_side(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    if bytes.get(4) != Some(&b'(') || bytes.last() != Some(&b')') {
        return None;
    }
    let head = s.get(..4)?;
    let body = s.get(6..s.len() - 2)?;
    Some(format!("{head}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_outer_parentheses() {
        assert_eq!(format_expression("( 2 + 3 )"), "2 + 3");
        assert_eq!(format_expression("( x = 7 )"), "x = 7");
        assert_eq!(format_expression("( 7 = x )"), "7 = x");
    }

    #[test]
    fn test_leaf_is_unchanged() {
        assert_eq!(format_expression("42"), "42");
        assert_eq!(format_expression(""), "");
    }

    #[test]
    fn test_moves_variable_to_front() {
        assert_eq!(format_expression("( ( 10 - 3 ) = x )"), "x = 10 - 3");
        assert_eq!(
            format_expression("( ( ( 20 - 2 ) / 3 ) = x )"),
            "x = ( 20 - 2 ) / 3"
        );
    }

    #[test]
    fn test_unwraps_right_side() {
        assert_eq!(format_expression("( x = ( 10 - 3 ) )"), "x = 10 - 3");
        assert_eq!(
            format_expression("( x = ( ( 20 - 2 ) / 3 ) )"),
            "x = ( 20 - 2 ) / 3"
        );
        // Any single-character left operand triggers the rewrite.
        assert_eq!(format_expression("( 2 + ( 3 * 4 ) )"), "2 + 3 * 4");
    }

    #[test]
    fn test_wider_left_operand_keeps_parentheses() {
        assert_eq!(format_expression("( 10 - ( 3 - 2 ) )"), "10 - ( 3 - 2 )");
        assert_eq!(
            format_expression("( ( 1 + 2 ) * ( 3 + 4 ) )"),
            "( 1 + 2 ) * ( 3 + 4 )"
        );
    }

    #[test]
    fn test_trailing_x_without_equals() {
        assert_eq!(format_expression("( ( 1 + 2 ) * x )"), "( 1 + 2 ) * x");
    }
}
