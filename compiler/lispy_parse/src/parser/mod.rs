//! Recursive-descent parser from tokens to [`SyntaxNode`]s.

use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{lex, NodeTag, ParseError, Span, SyntaxNode, Token, TokenKind};

/// Parse a whole input into a [`NodeTag::Program`] node.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let tokens = lex(source)?;
    Parser::new(source, &tokens).parse_program()
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Parser {
            source,
            tokens,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn end_of_input(&self) -> Span {
        Span::point(u32::try_from(self.source.len()).unwrap_or(u32::MAX))
    }

    fn parse_program(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![SyntaxNode::leaf(NodeTag::Anchor, "", Span::point(0))];

        while let Some(token) = self.peek() {
            if token.kind.is_closer() {
                return Err(ParseError::UnexpectedClose {
                    found: closer_char(token.kind),
                    span: token.span,
                });
            }
            children.push(self.parse_expr()?);
        }

        let end = self.end_of_input();
        children.push(SyntaxNode::leaf(NodeTag::Anchor, "", end));
        Ok(SyntaxNode::group(
            NodeTag::Program,
            Span::new(0, end.end),
            children,
        ))
    }

    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        ensure_sufficient_stack(|| {
            let Some(token) = self.bump() else {
                return Err(ParseError::Unclosed {
                    open: '(',
                    span: self.end_of_input(),
                });
            };
            let text = token.text(self.source);
            trace!(kind = ?token.kind, text, "parse_expr");

            match token.kind {
                TokenKind::Number => Ok(SyntaxNode::leaf(NodeTag::Number, text, token.span)),
                TokenKind::Symbol => Ok(SyntaxNode::leaf(NodeTag::Symbol, text, token.span)),
                TokenKind::LParen => self.parse_group(NodeTag::SExpr, token, TokenKind::RParen),
                TokenKind::LBrace => self.parse_group(NodeTag::QExpr, token, TokenKind::RBrace),
                TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnexpectedClose {
                    found: closer_char(token.kind),
                    span: token.span,
                }),
            }
        })
    }

    fn parse_group(
        &mut self,
        tag: NodeTag,
        open: Token,
        close: TokenKind,
    ) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![SyntaxNode::leaf(
            NodeTag::Delimiter,
            open.text(self.source),
            open.span,
        )];

        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::Unclosed {
                    open: open.kind.delimiter().unwrap_or('('),
                    span: open.span,
                });
            };

            if token.kind == close {
                self.pos += 1;
                children.push(SyntaxNode::leaf(
                    NodeTag::Delimiter,
                    token.text(self.source),
                    token.span,
                ));
                return Ok(SyntaxNode::group(tag, open.span.merge(token.span), children));
            }

            if token.kind.is_closer() {
                return Err(ParseError::MismatchedClose {
                    expected: closer_char(close),
                    found: closer_char(token.kind),
                    span: token.span,
                    open: open.span,
                });
            }

            children.push(self.parse_expr()?);
        }
    }
}

fn closer_char(kind: TokenKind) -> char {
    kind.delimiter().unwrap_or(')')
}
