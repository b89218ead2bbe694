//! Infix and LaTeX rendering of expression trees.
//!
//! Every operator node is written with its operands in parentheses, so the rendered text never
//! depends on operator precedence. The outermost pair of parentheses can be left out.

use std::fmt::{self, Display, Formatter};
use crate::{node::{BinOp, Node}, tree::ExpressionTree};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt_latex(f)
    }
}

/// Writes the infix form of the node. Leaves are written verbatim.
fn fmt_infix(node: &Node, f: &mut Formatter, paren: bool) -> fmt::Result {
    match node {
        Node::Number(text) | Node::Variable(text) => write!(f, "{}", text),
        Node::Operator { op, left, right } => {
            if paren {
                write!(f, "(")?;
            }
            fmt_infix(left, f, true)?;
            write!(f, "{}", op)?;
            fmt_infix(right, f, true)?;
            if paren {
                write!(f, ")")?;
            }
            Ok(())
        },
    }
}

/// Writes the LaTeX form of the node, with the same parenthesization as [`fmt_infix`].
fn fmt_latex(node: &Node, f: &mut Formatter, paren: bool) -> fmt::Result {
    match node {
        Node::Number(text) | Node::Variable(text) => write!(f, "{}", text),
        Node::Operator { op, left, right } => {
            if paren {
                write!(f, "\\left(")?;
            }
            fmt_latex(left, f, true)?;
            op.fmt_latex(f)?;
            fmt_latex(right, f, true)?;
            if paren {
                write!(f, "\\right)")?;
            }
            Ok(())
        },
    }
}

/// Helper to render a node through [`Display`] with a chosen outer parenthesization.
struct Infix<'a> {
    node: &'a Node,
    paren: bool,
}

impl Display for Infix<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fmt_infix(self.node, f, self.paren)
    }
}

impl Node {
    /// Produces the infix representation of this node and its descendants. Every operator
    /// except the outermost one has its operands parenthesized; the outermost one is too if
    /// `need_outer_paren` is true.
    ///
    /// ```
    /// use exptree::ExpressionTree;
    ///
    /// let tree = ExpressionTree::build("5 2 3 * +").unwrap();
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.to_infix(false), "5+(2*3)");
    /// assert_eq!(root.to_infix(true), "(5+(2*3))");
    /// ```
    pub fn to_infix(&self, need_outer_paren: bool) -> String {
        Infix { node: self, paren: need_outer_paren }.to_string()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fmt_infix(self, f, false)
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.root() {
            Some(root) => fmt_infix(root, f, false),
            None => Ok(()),
        }
    }
}

impl Latex for BinOp {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, " \\cdot "),
        }
    }
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        fmt_latex(self, f, false)
    }
}

impl Latex for ExpressionTree {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        match self.root() {
            Some(root) => root.fmt_latex(f),
            None => Ok(()),
        }
    }
}
