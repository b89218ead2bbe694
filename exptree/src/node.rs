//! The nodes of an expression tree.

use num_bigint::BigInt;
use std::fmt;

/// The binary operation that an operator node performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

impl BinOp {
    /// Returns the symbol of the operator as it appears in postfix and infix notation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        }
    }

    /// Returns the symbol of the operator as a single character.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        }
    }

    /// Applies the operator to two integers.
    pub fn apply(self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    NumberOperand,
    VariableOperand,
    Operator,
}

/// A node of an expression tree.
///
/// The kind of a node determines its children: operands are always leaves, and operators always
/// own exactly two children. Each node owns its children exclusively, so a tree has no sharing
/// and no cycles, and dropping a node drops its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An integer constant. The payload is its decimal text, such as `144`, or `-2` after
    /// constant folding.
    Number(String),

    /// A variable, such as `x`, or the text of a symbolic simplification result, such as `(x+y)`.
    Variable(String),

    /// A binary operation on two subtrees.
    Operator {
        op: BinOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Creates a number leaf.
    pub fn number(payload: impl Into<String>) -> Self {
        Self::Number(payload.into())
    }

    /// Creates a variable leaf.
    pub fn variable(payload: impl Into<String>) -> Self {
        Self::Variable(payload.into())
    }

    /// Creates an operator node that takes ownership of both children.
    pub fn operator(op: BinOp, left: Node, right: Node) -> Self {
        Self::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Number(_) => NodeKind::NumberOperand,
            Self::Variable(_) => NodeKind::VariableOperand,
            Self::Operator { .. } => NodeKind::Operator,
        }
    }

    /// Returns the text of this node: the number or variable for operands, the operator symbol
    /// for operators.
    pub fn payload(&self) -> &str {
        match self {
            Self::Number(text) | Self::Variable(text) => text,
            Self::Operator { op, .. } => op.as_str(),
        }
    }

    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Operator { .. })
    }

    /// Returns the left child, if this node is an operator.
    pub fn left(&self) -> Option<&Node> {
        match self {
            Self::Operator { left, .. } => Some(&**left),
            _ => None,
        }
    }

    /// Returns the right child, if this node is an operator.
    pub fn right(&self) -> Option<&Node> {
        match self {
            Self::Operator { right, .. } => Some(&**right),
            _ => None,
        }
    }

    /// Replaces the left child, returning the old one. Returns the given node back as an error
    /// if this node is a leaf.
    pub fn set_left(&mut self, node: Node) -> Result<Node, Node> {
        match self {
            Self::Operator { left, .. } => Ok(std::mem::replace(&mut **left, node)),
            _ => Err(node),
        }
    }

    /// Replaces the right child, returning the old one. Returns the given node back as an error
    /// if this node is a leaf.
    pub fn set_right(&mut self, node: Node) -> Result<Node, Node> {
        match self {
            Self::Operator { right, .. } => Ok(std::mem::replace(&mut **right, node)),
            _ => Err(node),
        }
    }

    /// Returns the value of this node if it is a leaf whose text is an integer literal.
    ///
    /// This looks at the text, not the kind: the `0` that `x-x` simplifies to is a variable leaf,
    /// but it still has an integer value.
    pub fn as_integer(&self) -> Option<BigInt> {
        match self {
            Self::Number(text) | Self::Variable(text) => {
                let digits = text.strip_prefix('-').unwrap_or(text);
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    text.parse().ok()
                } else {
                    None
                }
            },
            Self::Operator { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operator_children() {
        let node = Node::operator(BinOp::Sub, Node::number("5"), Node::variable("x"));
        assert_eq!(node.kind(), NodeKind::Operator);
        assert_eq!(node.payload(), "-");
        assert_eq!(node.left(), Some(&Node::number("5")));
        assert_eq!(node.right(), Some(&Node::variable("x")));
        assert!(!node.is_leaf());
    }

    #[test]
    fn leaves_have_no_children() {
        let leaf = Node::variable("y");
        assert_eq!(leaf.kind(), NodeKind::VariableOperand);
        assert_eq!(leaf.left(), None);
        assert_eq!(leaf.right(), None);
        assert!(leaf.is_leaf());
    }

    #[test]
    fn replace_children() {
        let mut node = Node::operator(BinOp::Add, Node::number("1"), Node::number("2"));
        assert_eq!(node.set_left(Node::variable("a")), Ok(Node::number("1")));
        assert_eq!(node.set_right(Node::variable("b")), Ok(Node::number("2")));
        assert_eq!(node, Node::operator(BinOp::Add, Node::variable("a"), Node::variable("b")));

        let mut leaf = Node::number("3");
        assert_eq!(leaf.set_left(Node::number("4")), Err(Node::number("4")));
    }

    #[test]
    fn integer_values() {
        assert_eq!(Node::number("42").as_integer(), Some(BigInt::from(42)));
        assert_eq!(Node::number("-2").as_integer(), Some(BigInt::from(-2)));
        assert_eq!(Node::variable("0").as_integer(), Some(BigInt::from(0)));
        assert_eq!(Node::variable("x").as_integer(), None);
        assert_eq!(Node::variable("(-x)").as_integer(), None);
        assert_eq!(Node::variable("-").as_integer(), None);
    }

    #[test]
    fn operator_arithmetic() {
        let (a, b) = (BigInt::from(7), BigInt::from(3));
        assert_eq!(BinOp::Add.apply(&a, &b), BigInt::from(10));
        assert_eq!(BinOp::Sub.apply(&b, &a), BigInt::from(-4));
        assert_eq!(BinOp::Mul.apply(&a, &b), BigInt::from(21));
    }

    #[test]
    fn operator_payload_matches_symbol() {
        for op in [BinOp::Add, BinOp::Sub, BinOp::Mul] {
            let node = Node::operator(op, Node::variable("a"), Node::variable("b"));
            assert_eq!(node.payload(), op.as_str());
            assert_eq!(op.to_string(), op.symbol().to_string());
        }
    }
}
