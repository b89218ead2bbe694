//! The expression tree, which owns a single optional root [`Node`].

mod build;

use crate::{
    node::Node,
    simplify::{simplify_with, step::Step},
    step_collector::StepCollector,
};

/// A binary expression tree.
///
/// The tree exclusively owns its root and, through it, every node of the expression. An empty
/// tree (the [`Default`]) has no root; a tree returned by [`ExpressionTree::build`] always has
/// one.
///
/// The [`PartialEq`] implementation compares trees structurally with [`same_tree`].
#[derive(Debug, Clone, Default)]
pub struct ExpressionTree {
    root: Option<Node>,
}

impl ExpressionTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree with the given root.
    pub fn from_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// Returns the root of the tree, or [`None`] if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Takes ownership of the root of the tree.
    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// Returns true if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Simplifies the expression, returning the simplified tree. See [`crate::simplify()`].
    ///
    /// Empty trees and trees made of a single leaf are returned unchanged.
    pub fn simplify(self) -> Self {
        self.simplify_with(&mut ())
    }

    /// Simplifies the expression, returning the simplified tree along with the steps taken, in
    /// the order they were applied.
    pub fn simplify_with_steps(self) -> (Self, Vec<Step>) {
        let mut steps = Vec::new();
        let tree = self.simplify_with(&mut steps);
        (tree, steps)
    }

    /// Simplifies the expression, reporting every step taken to the given collector.
    pub fn simplify_with(self, step_collector: &mut dyn StepCollector<Step>) -> Self {
        match self.root {
            Some(root) if !root.is_leaf() => Self::from_root(simplify_with(root, step_collector)),
            root => Self { root },
        }
    }

    /// Produces the infix representation of the tree. If `need_outer_paren` is false, the
    /// outermost pair of parentheses is left out. The empty tree produces an empty string.
    pub fn to_infix(&self, need_outer_paren: bool) -> String {
        self.root
            .as_ref()
            .map(|root| root.to_infix(need_outer_paren))
            .unwrap_or_default()
    }
}

impl From<Node> for ExpressionTree {
    fn from(root: Node) -> Self {
        Self::from_root(root)
    }
}

impl PartialEq for ExpressionTree {
    fn eq(&self, other: &Self) -> bool {
        same_tree(self.root(), other.root())
    }
}

impl Eq for ExpressionTree {}

/// Determines whether two (possibly empty) subtrees represent the same expression.
///
/// Two empty subtrees are the same. Otherwise, both nodes must have the same kind and payload,
/// and their left and right subtrees must be the same, respectively.
pub fn same_tree(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.kind() == b.kind()
                && a.payload() == b.payload()
                && same_tree(a.left(), b.left())
                && same_tree(a.right(), b.right())
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::node::BinOp;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn empty_trees_are_the_same() {
        assert!(same_tree(None, None));
        assert_eq!(ExpressionTree::new(), ExpressionTree::default());
        assert!(ExpressionTree::new().is_empty());
    }

    #[test]
    fn empty_and_nonempty_differ() {
        let leaf = Node::number("1");
        assert!(!same_tree(Some(&leaf), None));
        assert!(!same_tree(None, Some(&leaf)));
    }

    #[test]
    fn identical_builds_are_the_same() {
        let a = ExpressionTree::build("x 2 * 3 -").unwrap();
        let b = ExpressionTree::build(" x  2 *\n3 - ").unwrap();
        assert!(same_tree(a.root(), b.root()));
        assert_eq!(a, b);
    }

    #[test]
    fn different_payloads_differ() {
        let a = ExpressionTree::build("x 2 *").unwrap();
        let b = ExpressionTree::build("x 3 *").unwrap();
        let c = ExpressionTree::build("x 2 +").unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn operands_are_not_commutative() {
        let a = ExpressionTree::build("x 2 +").unwrap();
        let b = ExpressionTree::build("2 x +").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn different_shapes_differ() {
        let a = ExpressionTree::build("1 2 + 3 +").unwrap();
        let b = ExpressionTree::build("1 2 3 + +").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn same_text_different_kind_differs() {
        // `x x -` simplifies to a variable leaf with the text `0`
        let a = ExpressionTree::build("x x -").unwrap().simplify();
        let b = ExpressionTree::build("0").unwrap();
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn tree_from_node() {
        let tree = ExpressionTree::from(Node::operator(BinOp::Sub, Node::number("4"), Node::variable("y")));
        assert_eq!(tree, ExpressionTree::build("4 y -").unwrap());
        assert_eq!(tree.clone().into_root(), tree.root().cloned());
    }

    #[test]
    fn simplify_leaf_tree_is_unchanged() {
        let (tree, steps) = ExpressionTree::build("x").unwrap().simplify_with_steps();
        assert_eq!(tree, ExpressionTree::build("x").unwrap());
        assert!(steps.is_empty());

        let tree = ExpressionTree::build("42").unwrap().simplify();
        assert_eq!(tree.root(), Some(&Node::number("42")));
    }

    #[test]
    fn simplify_empty_tree_is_unchanged() {
        let (tree, steps) = ExpressionTree::new().simplify_with_steps();
        assert!(tree.is_empty());
        assert!(steps.is_empty());
        assert!(ExpressionTree::new().simplify().is_empty());
    }
}
