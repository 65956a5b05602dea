//! Binary expression tree.

use crate::operator::Operator;

/// The single free variable an equation can be solved for.
pub const VARIABLE: &str = "x";

/// A node of an expression tree.
///
/// Each node exclusively owns its children. A well-formed tree has a
/// [`Node::Leaf`] or a [`Node::Branch`] everywhere; [`Node::Absent`] marks a
/// child the input never supplied (`lhs` without `rhs` or the reverse) and
/// renders as nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Absent,
    /// A numeric literal in its original textual form, or the variable.
    Leaf(String),
    Branch {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(value: impl Into<String>) -> Node {
        Node::Leaf(value.into())
    }

    pub fn branch(op: Operator, left: Node, right: Node) -> Node {
        Node::Branch {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn variable() -> Node {
        Node::Leaf(VARIABLE.to_string())
    }

    /// Returns true if this node is exactly the variable marker.
    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Leaf(v) if v == VARIABLE)
    }

    /// Returns true if the variable occurs anywhere in this subtree.
    pub fn contains_variable(&self) -> bool {
        match self {
            Node::Absent => false,
            Node::Leaf(v) => v == VARIABLE,
            Node::Branch { left, right, .. } => {
                left.contains_variable() || right.contains_variable()
            }
        }
    }

    /// Counts the occurrences of the variable in this subtree.
    pub fn variable_count(&self) -> usize {
        match self {
            Node::Absent => 0,
            Node::Leaf(v) => usize::from(v == VARIABLE),
            Node::Branch { left, right, .. } => left.variable_count() + right.variable_count(),
        }
    }

    /// Longest root-to-leaf path, counting the root. `Absent` has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Absent => 0,
            Node::Leaf(_) => 1,
            Node::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn op(&self) -> Option<Operator> {
        match self {
            Node::Branch { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// The children of a branch, `None` for leaves and absent nodes.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Branch { left, right, .. } => Some((left, right)),
            _ => None,
        }
    }
}
