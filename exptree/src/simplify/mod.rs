//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which collapses an expression into a single
//! leaf in one bottom-up pass. The children of an operator are simplified first, so that by the
//! time the operator itself is visited, both of its operands are leaves. The rules in [`rules`]
//! are then tried in order, and the first one that applies replaces the operator with a new leaf.
//!
//! If both operands are integers, they are folded into a number leaf. Otherwise, the operation is
//! rewritten symbolically into a variable leaf whose text is the simplified expression, with any
//! identity operations (such as `x+0` or `1*x`) removed:
//!
//! ```
//! use exptree::ExpressionTree;
//!
//! let tree = ExpressionTree::build("x 0 + 1 * y 3 4 * - +").unwrap().simplify();
//! assert_eq!(tree.to_string(), "(x+(y-12))");
//! ```

pub mod rules;
pub mod step;

use crate::{node::Node, step_collector::StepCollector};
use step::Step;

/// Simplifies the given node and all of its descendants, reporting every step taken to the given
/// collector. Leaves are returned unchanged.
pub fn simplify_with(node: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match node {
        Node::Operator { op, left, right } => {
            let left = simplify_with(*left, step_collector);
            let right = simplify_with(*right, step_collector);
            rules::all(op, &left, &right, step_collector)
        },
        leaf => leaf,
    }
}

/// Simplifies the given node and all of its descendants.
pub fn simplify(node: Node) -> Node {
    simplify_with(node, &mut ())
}

/// Simplifies the given node. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied.
pub fn simplify_with_steps(node: Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let node = simplify_with(node, &mut steps);
    (node, steps)
}
