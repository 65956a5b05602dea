//! Fully parenthesized infix rendering.

use crate::node::Node;
use std::fmt;

/// Renders `node` as a sequence of infix tokens.
///
/// Every branch is wrapped in `(` `)` regardless of precedence; absent
/// children contribute no tokens.
pub fn tokens(node: &Node) -> Vec<&str> {
    let mut out = Vec::new();
    push_tokens(node, &mut out);
    out
}

fn push_tokens<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    match node {
        Node::Absent => {}
        Node::Leaf(value) => out.push(value.as_str()),
        Node::Branch { op, left, right } => {
            out.push("(");
            push_tokens(left, out);
            out.push(op.symbol());
            push_tokens(right, out);
            out.push(")");
        }
    }
}

/// Renders `node` as a space-separated infix string, e.g. `( 2 + 3 )`.
pub fn render(node: &Node) -> String {
    tokens(node).join(" ")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
