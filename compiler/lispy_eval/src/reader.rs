//! Conversion from syntax nodes to values.

use lispy_parse::{NodeTag, SyntaxNode};
use lispy_stack::ensure_sufficient_stack;

use crate::errors::{invalid_number, unreadable_node};
use crate::Value;

/// Read one node.
///
/// A program reads as a single S-expression over its top-level expressions.
/// A number outside the normal `f64` range reads as an error value, which the
/// evaluator then propagates like any other.
pub fn read(node: &SyntaxNode) -> Value {
    match node.tag {
        NodeTag::Number => read_number(&node.contents),
        NodeTag::Symbol => Value::Symbol(node.contents.clone()),
        NodeTag::Program | NodeTag::SExpr => Value::SExpr(read_children(node)),
        NodeTag::QExpr => Value::QExpr(read_children(node)),
        NodeTag::Delimiter | NodeTag::Anchor => unreadable_node(node.tag.as_str()).into(),
    }
}

/// Read each top-level expression of a program on its own.
pub fn read_program(node: &SyntaxNode) -> Vec<Value> {
    read_children(node)
}

fn read_children(node: &SyntaxNode) -> Vec<Value> {
    ensure_sufficient_stack(|| node.content_children().map(read).collect())
}

/// Overflow, and underflow of a nonzero literal to zero or a subnormal, are
/// both out of range.
fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && !underflowed(n, text) => Value::Number(n),
        _ => invalid_number().into(),
    }
}

fn underflowed(n: f64, text: &str) -> bool {
    !n.is_normal() && text.bytes().any(|b| matches!(b, b'1'..=b'9'))
}
