use crate::{
    classify::TokenClass,
    error::{kind, Error},
    node::Node,
    tokenizer::words,
};
use log::debug;
use std::ops::Range;
use super::ExpressionTree;

/// An operand on the builder's working stack, along with the region of the source code its
/// subtree was built from.
type Operand = (Node, Range<usize>);

impl ExpressionTree {
    /// Builds an expression tree from its postfix representation.
    ///
    /// Tokens are separated by whitespace. Numbers and variables are pushed onto a working stack
    /// as leaves; each operator pops its right operand, then its left operand, and pushes the
    /// combined node. At the end, the single node left on the stack is the root.
    ///
    /// If building fails, the working stack is dropped along with every node on it before the
    /// error is returned, so a failed build never leaves any part of a tree behind.
    ///
    /// ```
    /// use exptree::ExpressionTree;
    ///
    /// let tree = ExpressionTree::build("5 2 3 * +").unwrap();
    /// assert_eq!(tree.to_string(), "5+(2*3)");
    /// ```
    pub fn build(postfix: &str) -> Result<Self, Error> {
        let mut stack: Vec<Operand> = Vec::new();

        for word in words(postfix) {
            match word.kind.and_then(TokenClass::from_kind) {
                Some(TokenClass::Number) => stack.push((Node::number(word.lexeme), word.span)),
                Some(TokenClass::Variable) => stack.push((Node::variable(word.lexeme), word.span)),
                Some(TokenClass::Operator(op)) => match (stack.pop(), stack.pop()) {
                    (Some((right, right_span)), Some((left, left_span))) => {
                        stack.push((
                            Node::operator(op, left, right),
                            left_span.start.min(right_span.start)..word.span.end,
                        ));
                    },
                    (right, _) => {
                        let available = usize::from(right.is_some());
                        debug!("`{}` at {:?} has {} operand(s)", op, word.span, available);
                        return Err(Error::new(vec![word.span], kind::InsufficientOperands {
                            operator: op.symbol(),
                            available,
                        }));
                    },
                },
                None => {
                    debug!("invalid token `{}` at {:?}", word.lexeme, word.span);
                    return Err(Error::new(vec![word.span], kind::InvalidToken {
                        token: word.lexeme.to_string(),
                    }));
                },
            }
        }

        match stack.pop() {
            Some((root, _)) if stack.is_empty() => Ok(Self::from_root(root)),
            last => {
                let spans = stack.into_iter()
                    .chain(last)
                    .map(|(_, span)| span)
                    .collect::<Vec<_>>();
                debug!("{} operand(s) left after reading all tokens", spans.len());

                if spans.is_empty() {
                    let end = postfix.len();
                    Err(Error::new(vec![end..end], kind::MalformedExpression { leftover: 0 }))
                } else {
                    let leftover = spans.len();
                    Err(Error::new(spans, kind::MalformedExpression { leftover }))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{BinOp, Node, NodeKind};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn single_operation() {
        let tree = ExpressionTree::build("3 4 +").unwrap();
        assert_eq!(tree.root(), Some(&Node::operator(BinOp::Add, Node::number("3"), Node::number("4"))));
    }

    #[test]
    fn pop_order_keeps_operands_in_place() {
        let tree = ExpressionTree::build("a b -").unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.left(), Some(&Node::variable("a")));
        assert_eq!(root.right(), Some(&Node::variable("b")));
    }

    #[test]
    fn nested() {
        let tree = ExpressionTree::build("5 2 3 * +").unwrap();
        assert_eq!(tree.root(), Some(&Node::operator(
            BinOp::Add,
            Node::number("5"),
            Node::operator(BinOp::Mul, Node::number("2"), Node::number("3")),
        )));
    }

    #[test]
    fn single_operand() {
        let tree = ExpressionTree::build("  x1 ").unwrap();
        assert_eq!(tree.root().map(Node::kind), Some(NodeKind::VariableOperand));
    }

    #[test]
    fn arbitrary_whitespace() {
        let tree = ExpressionTree::build("\t1\n\n2 \r\n*   ").unwrap();
        assert_eq!(tree.root(), Some(&Node::operator(BinOp::Mul, Node::number("1"), Node::number("2"))));
    }

    #[test]
    fn insufficient_operands() {
        let err = ExpressionTree::build("3 +").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::InsufficientOperands>(), Some(&kind::InsufficientOperands {
            operator: '+',
            available: 1,
        }));
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn operator_first() {
        let err = ExpressionTree::build("* 1 2").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::InsufficientOperands>(), Some(&kind::InsufficientOperands {
            operator: '*',
            available: 0,
        }));
    }

    #[test]
    fn invalid_token() {
        let err = ExpressionTree::build("3 4 ?").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::InvalidToken>(), Some(&kind::InvalidToken { token: "?".to_string() }));
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn glued_tokens_are_invalid() {
        let err = ExpressionTree::build("3x 4 +").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::InvalidToken>(), Some(&kind::InvalidToken { token: "3x".to_string() }));

        let err = ExpressionTree::build("3 4+").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::InvalidToken>(), Some(&kind::InvalidToken { token: "4+".to_string() }));
    }

    #[test]
    fn invalid_token_after_error_free_prefix() {
        // the first error encountered is the one reported
        let err = ExpressionTree::build("1 2 + / +").unwrap_err();
        assert!(err.is::<kind::InvalidToken>());
    }

    #[test]
    fn leftover_operands() {
        let err = ExpressionTree::build("3 4").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::MalformedExpression>(), Some(&kind::MalformedExpression { leftover: 2 }));
        assert_eq!(err.spans, vec![0..1, 2..3]);
    }

    #[test]
    fn leftover_spans_cover_subtrees() {
        let err = ExpressionTree::build("1 2 + x y *").unwrap_err();
        assert_eq!(err.spans, vec![0..5, 6..11]);
    }

    #[test]
    fn empty_input() {
        for input in ["", "   \n\t"] {
            let err = ExpressionTree::build(input).unwrap_err();
            assert_eq!(err.downcast_ref::<kind::MalformedExpression>(), Some(&kind::MalformedExpression { leftover: 0 }));
            assert_eq!(err.spans, vec![input.len()..input.len()]);
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ExpressionTree::build("3 +").unwrap_err().to_string(),
            "not enough operands for `+`",
        );
        assert_eq!(
            ExpressionTree::build("3 4 ?").unwrap_err().to_string(),
            "invalid token `?`",
        );
        assert_eq!(
            ExpressionTree::build("3 4").unwrap_err().to_string(),
            "malformed expression: 2 operands were never combined",
        );
        assert_eq!(
            ExpressionTree::build("").unwrap_err().to_string(),
            "expected an expression",
        );
    }

    #[test]
    fn report_points_at_the_token() {
        let input = "1 2 + $ *";
        let err = ExpressionTree::build(input).unwrap_err();
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        let report = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();

        assert!(report.contains("invalid token `$`"));
        assert!(report.contains("I could not understand this token"));
    }

    #[test]
    fn report_points_at_non_ascii_token() {
        for input in ["5 é", "1 2 + ééé", "x ∑∑∑∑ +"] {
            let err = ExpressionTree::build(input).unwrap_err();
            let mut buf = Vec::new();
            err.write_report("input", input, &mut buf).unwrap();
            let report = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();

            assert!(report.contains(input), "source line missing from report for `{}`", input);
            assert!(report.contains("I could not understand this token"), "label missing from report for `{}`", input);
        }
    }
}
