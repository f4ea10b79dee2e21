//! Token definitions for EBNF sources
//!
//! These are the values the [Lexer](crate::ebnf::lexing::Lexer) hands to the parser. The raw
//! logos token enum lives in [base_tokenization](crate::ebnf::lexing::base_tokenization) and is
//! never seen outside of the lexing module: what the parser sees is a classified [Token] that
//! carries its text and the line/column where it starts.

use crate::ebnf::ast::range::Position;
use serde::Serialize;
use std::fmt;

/// Grammar symbols with a meaning of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `=`
    Equals,
    /// `:`
    Colon,
    /// `:==`
    ColonEquals,
    /// `;`
    Semicolon,
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `|`
    Pipe,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `-`
    Minus,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::Colon => ":",
            Operator::ColonEquals => ":==",
            Operator::Semicolon => ";",
            Operator::Period => ".",
            Operator::Comma => ",",
            Operator::Pipe => "|",
            Operator::OpenParen => "(",
            Operator::CloseParen => ")",
            Operator::OpenBracket => "[",
            Operator::CloseBracket => "]",
            Operator::OpenBrace => "{",
            Operator::CloseBrace => "}",
            Operator::Minus => "-",
        }
    }

    /// Symbols that separate a rule name from its definition
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            Operator::Equals | Operator::Colon | Operator::ColonEquals
        )
    }

    /// Symbols that end a rule
    pub fn is_terminator(&self) -> bool {
        matches!(self, Operator::Semicolon | Operator::Period)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Identifier,
    /// A quoted literal; the token text holds the content between the quotes
    Terminal,
    Operator(Operator),
    /// A `(* ... *)` comment; the token text excludes the delimiters
    Comment,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Terminal => write!(f, "terminal"),
            TokenKind::Operator(op) => write!(f, "'{}'", op),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A classified token with its text and start position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn end_of_input(position: Position) -> Self {
        Self::new(TokenKind::EndOfInput, "", position)
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        self.kind == TokenKind::Operator(op)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Check if this token can open a term (identifier, terminal, group, option, repetition)
    pub fn starts_term(&self) -> bool {
        match self.kind {
            TokenKind::Identifier | TokenKind::Terminal => true,
            TokenKind::Operator(op) => matches!(
                op,
                Operator::OpenParen | Operator::OpenBracket | Operator::OpenBrace
            ),
            _ => false,
        }
    }

    /// Short human readable description, used in error messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier '{}'", self.text),
            TokenKind::Terminal => format!("terminal \"{}\"", self.text),
            TokenKind::Operator(op) => format!("'{}'", op),
            TokenKind::Comment => "comment".to_string(),
            TokenKind::EndOfInput => "end of input".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.describe(), self.position)
    }
}
