//! Tokenizer built on `logos`.

use logos::Logos;

use crate::{ParseError, Span};

/// Token kinds produced by the tokenizer.
///
/// A number literal wins over a symbol of the same length, so `-5` is a
/// number while `-` and `-x` are symbols.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|;[^\n]*)")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+(\.[0-9]+)?", priority = 10)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&^]+")]
    Symbol,
}

impl TokenKind {
    /// The bracket character for delimiter tokens.
    pub fn delimiter(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Number | TokenKind::Symbol => None,
        }
    }

    pub fn is_closer(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }
}

/// A token and where it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The source text this token covers.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

/// Tokenize `source`, stopping at the first character no token can start with.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(()) => {
                let ch = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::UnexpectedChar { ch, span });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests;
