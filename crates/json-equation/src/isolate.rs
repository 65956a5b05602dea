//! Rearranges an equation so the variable stands alone on one side.
//!
//! Each step peels one operator off the side holding the variable (the
//! active side) and moves it, inverted, onto the other (inert) side:
//!
//! ```text
//! (x + 3) = 10    ->    x = (10 - 3)
//! 10 = (20 - x)   ->    (10 + x) = 20    ->    x = (20 - 10)
//! ```
//!
//! For `-` and `/`, and whenever the variable sits in the left operand, the
//! right operand is carried across and the left operand stays active.
//! Otherwise the left operand is carried and the right stays active. A
//! non-commutative operator with the variable on its right therefore moves
//! the variable to the opposite side of `=`, and the following step peels the
//! inverted operator off again.

use crate::error::EquationError;
use crate::node::Node;
use crate::operator::Operator;
use log::debug;

/// Rewrites `root` until the variable is an immediate child of `=`.
///
/// The root must be an `=` branch and the variable must occur exactly once
/// in the whole tree. An equation that is already isolated is returned
/// unchanged.
pub fn isolate(root: Node) -> Result<Node, EquationError> {
    isolate_counting_steps(root).map(|(root, _)| root)
}

// Every operator between the side's root and the variable costs at most two
// steps, so the count never exceeds twice the depth of that side.
fn isolate_counting_steps(mut root: Node) -> Result<(Node, usize), EquationError> {
    if root.op() != Some(Operator::Equal) {
        return Err(EquationError::NotAnEquation);
    }
    match root.variable_count() {
        0 => return Err(EquationError::VariableNotFound),
        1 => {}
        n => return Err(EquationError::MultipleOccurrences(n)),
    }

    let mut steps = 0usize;
    while !is_isolated(&root) {
        step(&mut root)?;
        steps += 1;
        debug!("isolate step {}: {}", steps, root);
    }
    Ok((root, steps))
}

/// Returns true if the variable is the left or right child of the root.
pub fn is_isolated(root: &Node) -> bool {
    root.children()
        .is_some_and(|(left, right)| left.is_variable() || right.is_variable())
}

fn step(root: &mut Node) -> Result<(), EquationError> {
    let Node::Branch { left, right, .. } = root else {
        return Err(EquationError::NotAnEquation);
    };
    let (active, inert) = if left.contains_variable() {
        (left, right)
    } else {
        (right, left)
    };

    let Node::Branch {
        op,
        left: active_left,
        right: active_right,
    } = std::mem::take(&mut **active)
    else {
        return Err(EquationError::VariableNotFound);
    };
    let inverse = op.inverse().ok_or(EquationError::NestedEquation)?;

    let (narrowed, carried) = if !op.is_commutative() || active_left.contains_variable() {
        (active_left, active_right)
    } else {
        (active_right, active_left)
    };

    let moved = Node::Branch {
        op: inverse,
        left: Box::new(std::mem::take(&mut **inert)),
        right: carried,
    };
    **inert = moved;
    *active = narrowed;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use proptest::prelude::*;

    fn eq(left: Node, right: Node) -> Node {
        Node::branch(Operator::Equal, left, right)
    }

    fn leaf(v: &str) -> Node {
        Node::leaf(v)
    }

    #[test]
    fn test_isolate_addition_left() {
        let tree = eq(
            Node::branch(Operator::Add, Node::variable(), leaf("3")),
            leaf("10"),
        );
        let out = isolate(tree).unwrap();
        assert_eq!(render(&out), "( x = ( 10 - 3 ) )");
    }

    #[test]
    fn test_isolate_addition_variable_on_right_of_operator() {
        let tree = eq(
            Node::branch(Operator::Add, leaf("3"), Node::variable()),
            leaf("10"),
        );
        let out = isolate(tree).unwrap();
        assert_eq!(render(&out), "( x = ( 10 - 3 ) )");
    }

    #[test]
    fn test_isolate_subtraction_variable_on_right_flips_sides() {
        let tree = eq(
            leaf("10"),
            Node::branch(Operator::Subtract, leaf("20"), Node::variable()),
        );
        let out = isolate(tree).unwrap();
        assert_eq!(render(&out), "( x = ( 20 - 10 ) )");
    }

    #[test]
    fn test_isolate_division_variable_on_right() {
        let tree = eq(
            Node::branch(Operator::Divide, leaf("12"), Node::variable()),
            leaf("4"),
        );
        let out = isolate(tree).unwrap();
        assert_eq!(render(&out), "( ( 12 / 4 ) = x )");
    }

    #[test]
    fn test_isolate_variable_on_right_side_of_equation() {
        let tree = eq(
            leaf("10"),
            Node::branch(Operator::Multiply, leaf("2"), Node::variable()),
        );
        let out = isolate(tree).unwrap();
        assert_eq!(render(&out), "( ( 10 / 2 ) = x )");
    }

    #[test]
    fn test_isolate_nested() {
        // ((x * 2) - 4) = 10
        let tree = eq(
            Node::branch(
                Operator::Subtract,
                Node::branch(Operator::Multiply, Node::variable(), leaf("2")),
                leaf("4"),
            ),
            leaf("10"),
        );
        let out = isolate(tree).unwrap();
        assert_eq!(render(&out), "( x = ( ( 10 + 4 ) / 2 ) )");
    }

    #[test]
    fn test_isolate_already_isolated_is_noop() {
        let tree = eq(Node::variable(), Node::branch(Operator::Add, leaf("1"), leaf("2")));
        assert_eq!(isolate(tree.clone()).unwrap(), tree);
        let tree = eq(leaf("5"), Node::variable());
        assert_eq!(isolate(tree.clone()).unwrap(), tree);
    }

    #[test]
    fn test_isolate_tolerates_absent_child() {
        let tree = eq(
            Node::branch(Operator::Add, Node::variable(), Node::Absent),
            leaf("10"),
        );
        let out = isolate(tree).unwrap();
        assert_eq!(render(&out), "( x = ( 10 - ) )");
    }

    // Depth of the equation side holding the variable, leaf included.
    fn variable_side_depth(root: &Node) -> usize {
        let (left, right) = root.children().unwrap();
        if left.contains_variable() {
            left.depth()
        } else {
            right.depth()
        }
    }

    #[test]
    fn test_isolate_step_counts() {
        let isolated = eq(Node::variable(), leaf("7"));
        assert_eq!(isolate_counting_steps(isolated).unwrap().1, 0);

        let one_level = eq(
            Node::branch(Operator::Add, Node::variable(), leaf("3")),
            leaf("10"),
        );
        assert_eq!(isolate_counting_steps(one_level).unwrap().1, 1);

        // `-` with the variable on its right crosses `=` first.
        let flipped = eq(
            leaf("10"),
            Node::branch(Operator::Subtract, leaf("20"), Node::variable()),
        );
        assert_eq!(variable_side_depth(&flipped), 2);
        assert_eq!(isolate_counting_steps(flipped).unwrap().1, 2);
    }

    fn arb_op() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]
    }

    fn arb_equation() -> impl Strategy<Value = Node> {
        let numeric = (1u32..10)
            .prop_map(|n| Node::leaf(n.to_string()))
            .prop_recursive(3, 8, 2, |inner| {
                (arb_op(), inner.clone(), inner).prop_map(|(op, l, r)| Node::branch(op, l, r))
            })
            .boxed();
        let with_x = Just(Node::variable()).prop_recursive(6, 32, 2, move |inner| {
            (arb_op(), inner, numeric.clone(), any::<bool>()).prop_map(|(op, x, rest, x_left)| {
                if x_left {
                    Node::branch(op, x, rest)
                } else {
                    Node::branch(op, rest, x)
                }
            })
        });
        (with_x, 1u32..10, any::<bool>()).prop_map(|(x, n, x_left)| {
            let rest = Node::leaf(n.to_string());
            if x_left {
                eq(x, rest)
            } else {
                eq(rest, x)
            }
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn test_isolate_steps_bounded_by_twice_depth(tree in arb_equation()) {
            let bound = 2 * (variable_side_depth(&tree) - 1);
            let (solved, steps) = isolate_counting_steps(tree).unwrap();
            prop_assert!(is_isolated(&solved));
            prop_assert!(steps <= bound, "{} steps, bound {}", steps, bound);
        }
    }

    #[test]
    fn test_isolate_precondition_errors() {
        let not_eq = Node::branch(Operator::Add, Node::variable(), leaf("1"));
        assert_eq!(isolate(not_eq), Err(EquationError::NotAnEquation));

        let missing = eq(leaf("1"), leaf("2"));
        assert_eq!(isolate(missing), Err(EquationError::VariableNotFound));

        let twice = eq(
            Node::branch(Operator::Add, Node::variable(), Node::variable()),
            leaf("2"),
        );
        assert_eq!(isolate(twice), Err(EquationError::MultipleOccurrences(2)));
    }

    #[test]
    fn test_isolate_nested_equal_is_rejected() {
        let tree = eq(
            Node::branch(Operator::Equal, Node::variable(), leaf("1")),
            leaf("2"),
        );
        assert_eq!(isolate(tree), Err(EquationError::NestedEquation));
    }
}
