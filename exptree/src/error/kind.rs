use ariadne::Fmt;
use exptree_attrs::ErrorKind;
use exptree_error::{ErrorKind, EXPR};

/// An operator appeared while fewer than two operands were available to it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("not enough operands for `{}`", operator),
    labels = [format!(
        "this operator needs two {}, but {}",
        "operands".fg(EXPR),
        match available {
            0 => "none came before it".to_string(),
            n => format!("only {} came before it", n),
        },
    )],
    help = "in postfix notation, both operands must come before the operator, as in `3 4 +`",
)]
pub struct InsufficientOperands {
    /// The operator that was missing operands.
    pub operator: char,

    /// The number of operands that were available.
    pub available: usize,
}

/// A token was neither a number, a variable, nor an operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid token `{}`", token),
    labels = ["I could not understand this token"],
    help = format!(
        "tokens must be {}, {}, or one of the operators {}",
        "numbers like `42`".fg(EXPR),
        "variables like `x2`".fg(EXPR),
        "`+ - *`".fg(EXPR),
    ),
)]
pub struct InvalidToken {
    /// The raw text of the token.
    pub token: String,
}

/// After the whole input was read, there was not exactly one expression left.
///
/// This happens when the input is empty, or when there are more operands than the operators can
/// consume. One span is reported per leftover operand (or a single span at the end of the input,
/// if there were none).
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *leftover == 0 {
        "expected an expression".to_string()
    } else {
        format!("malformed expression: {} operands were never combined", leftover)
    },
    labels = if *leftover == 0 {
        vec![format!("add an {} here", "expression".fg(EXPR))]
    } else {
        (0..*leftover)
            .map(|i| format!("operand {}", i + 1))
            .collect::<Vec<_>>()
    },
    help = if *leftover == 0 {
        "a postfix expression needs at least one number or variable"
    } else {
        "add operators to combine these operands, or remove some of them"
    },
)]
pub struct MalformedExpression {
    /// The number of operands left over after reading the input.
    pub leftover: usize,
}
