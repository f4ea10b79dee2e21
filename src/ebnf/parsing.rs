//! Parsing module for EBNF grammars
//!
//! Turns source text into an [Ast]. The [Parser] pulls tokens from the
//! [Lexer](crate::ebnf::lexing::Lexer) one at a time and builds the tree by recursive descent.
//!
//! ## Grammar
//!
//! ```text
//! Syntax     := [ Terminal ] ( '{' { Rule } '}' [ Terminal ] | { Rule } ) EndOfInput
//! Rule       := Identifier ( '=' | ':' | ':==' ) Expression ( ';' | '.' )
//! Expression := Sequence { '|' Sequence }
//! Sequence   := Term { [ ',' ] Term }
//! Term       := Factor { '-' Factor }
//! Factor     := Identifier | Terminal
//!             | '(' Expression ')' | '[' Expression ']' | '{' Expression '}'
//! ```
//!
//! A leading terminal is stored as the syntax `title`, a terminal after the closing brace of
//! the framed form as its `meta`.
//!
//! ## Tree shape
//!
//! - A rule node carries its `name` and has an identifier child with that name, followed by
//!   the expression.
//! - Exceptions chain to the left: `a - b - c` is an exception whose first child is the
//!   exception `a - b` and whose second child is `c`.
//! - Single-term sequences and single-alternative choices collapse: no wrapper is created.
//! - A comment becomes a node in the innermost container under construction, placed right
//!   before the construct it precedes. Comments trailing the last construct of a container
//!   are appended to that container. When a wrapper collapses its comments move up with the
//!   remaining term.
//!
//! ## Failures
//!
//! Parsing is all-or-nothing: the first lexing or parsing error is returned and no partial
//! tree is kept. More than [MAX_NESTING] open enclosures and chained exceptions is a parse
//! error.

pub mod error;
pub mod parser;

pub use error::{Error, ParseError};
pub use parser::{Parser, MAX_NESTING};

use crate::ebnf::ast::Ast;

/// Parse an EBNF source into a tree
pub fn parse_syntax(source: &str) -> Result<Ast, Error> {
    Parser::new(source).parse()
}
