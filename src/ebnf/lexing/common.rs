//! Common lexer types

use crate::ebnf::ast::range::Position;
use thiserror::Error;

/// Errors that can occur during lexing
///
/// Every variant carries the position where the offending construct starts. The lexer does not
/// recover: after the first error the token stream is over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unterminated terminal literal starting at {position}")]
    UnterminatedLiteral { position: Position },

    #[error("Unterminated comment starting at {position}")]
    UnterminatedComment { position: Position },

    #[error("Unexpected character '{character}' at {position}")]
    UnexpectedCharacter { character: char, position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedLiteral { position }
            | LexError::UnterminatedComment { position }
            | LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}
