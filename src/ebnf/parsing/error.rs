//! Parser errors

use crate::ebnf::ast::range::Position;
use crate::ebnf::lexing::LexError;
use crate::ebnf::token::Token;
use thiserror::Error;

/// The token stream does not match any production at the current point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected {expected} but found {found} at {position}")]
pub struct ParseError {
    /// The construct the parser was looking for, e.g. `expression` or `';' or '.'`
    pub expected: String,
    /// Description of the offending token
    pub found: String,
    pub position: Position,
}

impl ParseError {
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        Self {
            expected: expected.into(),
            found: found.describe(),
            position: found.position,
        }
    }
}

/// Anything that stops a parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn position(&self) -> Position {
        match self {
            Error::Lex(err) => err.position(),
            Error::Parse(err) => err.position,
        }
    }
}
