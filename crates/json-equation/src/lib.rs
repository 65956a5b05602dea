//! Render, rearrange and evaluate single-variable equations described as
//! JSON expression trees.
//!
//! # Overview
//!
//! An expression is a JSON scalar (a leaf) or an object
//! `{"op": <operator>, "lhs": <expr>, "rhs": <expr>}`. The operators are
//! `+`, `-`, `*`, `/` and `=`; the words `add`, `subtract`, `multiply`,
//! `divide` and `equal` are accepted in their place. The string `"x"` is the
//! variable.
//!
//! # Example
//!
//! ```
//! use json_equation::{isolate, parse_expression, render, format_expression, ParseOptions};
//!
//! let input = r#"{"op": "equal", "lhs": {"op": "add", "lhs": "x", "rhs": 3}, "rhs": 10}"#;
//! let tree = parse_expression(input, ParseOptions::default()).unwrap();
//! let solved = isolate(tree).unwrap();
//!
//! assert_eq!(render(&solved), "( x = ( 10 - 3 ) )");
//! assert_eq!(format_expression(&render(&solved)), "x = 10 - 3");
//! assert_eq!(json_equation::evaluate("10 - 3").unwrap(), 7.0);
//! ```

pub mod build;
pub mod cli;
pub mod error;
pub mod eval;
pub mod format;
pub mod isolate;
pub mod keywords;
pub mod node;
pub mod operator;
pub mod render;

// Re-export the core public API
pub use build::{build, parse_expression, ParseOptions};
pub use error::EquationError;
pub use eval::{evaluate, evaluate_tree, Token};
pub use format::format_expression;
pub use isolate::isolate;
pub use keywords::substitute_keywords;
pub use node::{Node, VARIABLE};
pub use operator::Operator;
pub use render::render;
