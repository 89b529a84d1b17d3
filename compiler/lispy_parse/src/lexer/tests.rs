use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("lex failed for {source:?}: {err}"),
    }
}

#[test]
fn test_lex_brackets() {
    assert_eq!(
        kinds("( ) { }"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn test_lex_numbers_and_symbols() {
    assert_eq!(
        kinds("+ 1 -2 3.5 head"),
        vec![
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Symbol,
        ]
    );
}

#[test]
fn test_lex_minus_is_symbol() {
    assert_eq!(kinds("- -x"), vec![TokenKind::Symbol, TokenKind::Symbol]);
}

#[test]
fn test_lex_lambda_and_operators() {
    assert_eq!(
        kinds(r"\ = & ^ <= !"),
        vec![TokenKind::Symbol; 6]
    );
}

#[test]
fn test_lex_skips_comments() {
    assert_eq!(
        kinds("; a comment\n(+ 1 2) ; trailing"),
        vec![
            TokenKind::LParen,
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_lex_token_text_and_span() {
    let source = "(head {10 20})";
    let tokens = match lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(tokens[1].text(source), "head");
    assert_eq!(tokens[1].span, Span::new(1, 5));
    assert_eq!(tokens[3].text(source), "10");
}

#[test]
fn test_lex_unexpected_char() {
    assert_eq!(
        lex("(+ 1 #)"),
        Err(ParseError::UnexpectedChar {
            ch: '#',
            span: Span::new(5, 6),
        })
    );
}

#[test]
fn test_delimiter_chars() {
    assert_eq!(TokenKind::LBrace.delimiter(), Some('{'));
    assert_eq!(TokenKind::Symbol.delimiter(), None);
    assert!(TokenKind::RParen.is_closer());
    assert!(!TokenKind::LParen.is_closer());
}
