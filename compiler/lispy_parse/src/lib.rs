//! Lispy Parse - turns source text into a tagged syntax tree.
//!
//! The tree is deliberately close to the concrete text: every group keeps its
//! bracket tokens as [`NodeTag::Delimiter`] children and the program root is
//! framed by [`NodeTag::Anchor`] markers. Consumers walk the tree and skip
//! those artifacts (see [`SyntaxNode::is_artifact`]).
//!
//! # Grammar
//!
//! ```text
//! number  : /-?[0-9]+(\.[0-9]+)?/
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&^]+/
//! sexpr   : '(' <expr>* ')'
//! qexpr   : '{' <expr>* '}'
//! expr    : <number> | <symbol> | <sexpr> | <qexpr>
//! program : /^/ <expr>* /$/
//! ```
//!
//! Whitespace separates tokens and `;` starts a comment running to the end of
//! the line.

mod error;
mod lexer;
mod node;
mod parser;
mod span;

pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use node::{NodeTag, SyntaxNode};
pub use parser::parse;
pub use span::Span;
