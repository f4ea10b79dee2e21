//! Core tokenization for EBNF sources
//!
//! The raw tokens are defined with the logos derive macro. Quoted terminals and comments are
//! scanned with callbacks so that the content between the delimiters ends up in the token,
//! and so an unterminated one fails on its opening delimiter.

use logos::Logos;
use std::ops::Range;

/// All raw tokens in an EBNF source
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawToken {
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Identifier,

    #[token("\"", |lex| quoted(lex, '"'))]
    #[token("'", |lex| quoted(lex, '\''))]
    Terminal(String),

    #[token("(*", comment)]
    Comment(String),

    #[token(":==")]
    ColonEquals,
    #[token("=")]
    Equals,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Period,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("-")]
    Minus,
}

/// Scan up to the closing quote; `None` when the literal never closes
fn quoted(lex: &mut logos::Lexer<RawToken>, quote: char) -> Option<String> {
    let rest = lex.remainder();
    let end = rest.find(quote)?;
    let content = rest[..end].to_string();
    lex.bump(end + quote.len_utf8());
    Some(content)
}

/// Scan up to the closing `*)`; `None` when the comment never closes
fn comment(lex: &mut logos::Lexer<RawToken>) -> Option<String> {
    let rest = lex.remainder();
    let end = rest.find("*)")?;
    let content = rest[..end].to_string();
    lex.bump(end + 2);
    Some(content)
}

/// Convenience function to tokenize a string and collect tokens with their spans
///
/// Failed tokens are reported as `Err(())` with the span of the offending slice.
pub fn tokenize_with_spans(source: &str) -> Vec<(Result<RawToken, ()>, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result, lexer.span()));
    }

    tokens
}
