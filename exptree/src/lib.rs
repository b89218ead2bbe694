//! Binary expression trees built from postfix notation.
//!
//! An [`ExpressionTree`] is built from a whitespace-separated postfix expression made of integers,
//! variables, and the binary operators `+`, `-`, and `*`. The tree can then be simplified into a
//! single leaf by folding constants and removing identity operations, and rendered back to infix
//! text (or LaTeX, with [`fmt::Latex`]).
//!
//! ```
//! use exptree::ExpressionTree;
//!
//! let tree = ExpressionTree::build("x 1 * 2 3 + *").unwrap();
//! assert_eq!(tree.to_string(), "(x*1)*(2+3)");
//!
//! let simplified = tree.simplify();
//! assert_eq!(simplified.to_string(), "(x*5)");
//! ```
//!
//! Building fails with an [`Error`] if the input is not a well-formed postfix expression. The
//! error carries the spans of the offending input, and can be rendered as a report:
//!
//! ```
//! use exptree::{error::kind::InsufficientOperands, ExpressionTree};
//!
//! let err = ExpressionTree::build("2 +").unwrap_err();
//! assert!(err.is::<InsufficientOperands>());
//! assert_eq!(err.spans, vec![2..3]);
//! ```

pub mod classify;
pub mod error;
pub mod fmt;
pub mod node;
pub mod simplify;
pub mod step_collector;
pub mod tokenizer;
pub mod tree;

pub use error::Error;
pub use node::{BinOp, Node, NodeKind};
pub use simplify::simplify;
pub use tree::{same_tree, ExpressionTree};
