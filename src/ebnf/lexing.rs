//! Lexer
//!
//!     This module turns EBNF source text into classified [Token]s. Tokenization happens in two
//!     layers:
//!
//!         1. Core tokenization using a logos lexer. See [base_tokenization]. This knows the
//!            shape of identifiers, quoted terminals, comments and the grammar symbols, and skips
//!            whitespace.
//!
//!         2. The [Lexer] wrapper, which pulls one raw token at a time, converts its byte range
//!            into a line/column [Position](crate::ebnf::ast::Position) and turns logos failures
//!            into a [LexError] that names what went wrong and where it started.
//!
//!     The token sequence is lazy and can not be restarted: to scan again, build a new Lexer
//!     over the same source. Once the input is exhausted every call yields the same
//!     end-of-input token. Once a lexing error happened every call yields that error.
//!
//! Comments
//!
//!     `(* ... *)` comments are emitted as tokens, not skipped: the parser keeps them as nodes
//!     in the tree. They do not nest.

pub mod base_tokenization;
pub mod common;
pub mod lexer;

pub use common::LexError;
pub use lexer::Lexer;

use crate::ebnf::token::Token;

/// Collect the whole token stream, the final end-of-input token included
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.is_end();
        tokens.push(token);
        if done {
            break;
        }
    }

    Ok(tokens)
}
