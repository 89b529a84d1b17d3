//! Errors raised while turning text into a syntax tree.

use thiserror::Error;

use crate::Span;

/// A malformed input. Parse errors never reach the evaluator; the caller
/// reports them and moves on to the next input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, span: Span },

    #[error("unexpected '{found}' with no matching opener")]
    UnexpectedClose { found: char, span: Span },

    #[error("expected '{expected}' to close this group, found '{found}'")]
    MismatchedClose {
        expected: char,
        found: char,
        span: Span,
        open: Span,
    },

    #[error("unclosed '{open}'")]
    Unclosed { open: char, span: Span },
}

impl ParseError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnexpectedClose { span, .. }
            | ParseError::MismatchedClose { span, .. }
            | ParseError::Unclosed { span, .. } => *span,
        }
    }

    /// Secondary location worth pointing at, if any.
    pub fn related(&self) -> Option<(Span, &'static str)> {
        match self {
            ParseError::MismatchedClose { open, .. } => Some((*open, "group opened here")),
            _ => None,
        }
    }
}
