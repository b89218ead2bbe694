//! Implementation of the simplification rules.
//!
//! Each rule accepts an operator and its two operands, which must both be leaves, and returns
//! `Some(node)` with the leaf that replaces the operation if the rule applies, or `None` if the
//! rule does not apply.
//!
//! [`fold_constant`] produces a number leaf. Every other rule works on the text of the operands
//! and produces a variable leaf, even when the resulting text is a number (such as the `0` from
//! `a-a`).

use crate::{
    node::{BinOp, Node},
    simplify::step::Step,
    step_collector::StepCollector,
};

/// If the operator is `target`, calls the given transformation function with the text of the
/// left and right operands.
///
/// Returns `Some(text)` with the text of the replacement leaf if a transformation was applied.
fn do_op(
    op: BinOp,
    target: BinOp,
    left: &Node,
    right: &Node,
    f: impl FnOnce(&str, &str) -> Option<String>,
) -> Option<String> {
    if op == target {
        f(left.payload(), right.payload())
    } else {
        None
    }
}

/// `3+4 = 7`
/// `3-4 = -1`
/// `3*4 = 12`
pub fn fold_constant(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Node> {
    let value = op.apply(&left.as_integer()?, &right.as_integer()?);
    step_collector.push(Step::FoldConstant);
    Some(Node::Number(value.to_string()))
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Node> {
    let text = do_op(op, BinOp::Add, left, right, |left, right| match (left, right) {
        ("0", other) | (other, "0") => Some(other.to_string()),
        _ => None,
    })?;

    step_collector.push(Step::AddZero);
    Some(Node::Variable(text))
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Node> {
    let text = do_op(op, BinOp::Mul, left, right, |left, right| {
        (left == "0" || right == "0").then(|| "0".to_string())
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(Node::Variable(text))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Node> {
    let text = do_op(op, BinOp::Mul, left, right, |left, right| match (left, right) {
        ("1", other) | (other, "1") => Some(other.to_string()),
        _ => None,
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(Node::Variable(text))
}

/// `a-a = 0`
///
/// The operands are compared by their text only.
pub fn subtract_self(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Node> {
    let text = do_op(op, BinOp::Sub, left, right, |left, right| {
        (left == right).then(|| "0".to_string())
    })?;

    step_collector.push(Step::SubtractSelf);
    Some(Node::Variable(text))
}

/// `0-a = (-a)`
pub fn negate_from_zero(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Node> {
    let text = do_op(op, BinOp::Sub, left, right, |left, right| {
        (left == "0").then(|| format!("(-{})", right))
    })?;

    step_collector.push(Step::NegateFromZero);
    Some(Node::Variable(text))
}

/// `a-0 = a`
pub fn subtract_zero(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Node> {
    let text = do_op(op, BinOp::Sub, left, right, |left, right| {
        (right == "0").then(|| left.to_string())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(Node::Variable(text))
}

/// `a+b = (a+b)`
/// `a-b = (a-b)`
/// `a*b = (a*b)`
///
/// Always applies.
pub fn combine(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    step_collector.push(Step::Combine);
    Node::Variable(format!("({}{}{})", left.payload(), op, right.payload()))
}

/// Applies all rules, in order, and returns the result of the first one that applies.
pub fn all(
    op: BinOp,
    left: &Node,
    right: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    fold_constant(op, left, right, step_collector)
        .or_else(|| add_zero(op, left, right, step_collector))
        .or_else(|| multiply_zero(op, left, right, step_collector))
        .or_else(|| multiply_one(op, left, right, step_collector))
        .or_else(|| subtract_self(op, left, right, step_collector))
        .or_else(|| negate_from_zero(op, left, right, step_collector))
        .or_else(|| subtract_zero(op, left, right, step_collector))
        .unwrap_or_else(|| combine(op, left, right, step_collector))
}
