//! Pull based lexer over the logos token stream

use super::base_tokenization::RawToken;
use super::common::LexError;
use crate::ebnf::ast::range::SourceLocation;
use crate::ebnf::token::{Operator, Token, TokenKind};
use log::trace;
use logos::Logos;

/// Produces one [Token] per call to [Lexer::next_token]
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    location: SourceLocation<'src>,
    failure: Option<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: RawToken::lexer(source),
            location: SourceLocation::new(source),
            failure: None,
        }
    }

    /// Scan the next token
    ///
    /// At the end of the input this keeps returning an end-of-input token. After an error it
    /// keeps returning that error.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let token = match self.inner.next() {
            None => Token::end_of_input(self.location.end()),
            Some(Ok(raw)) => self.classify(raw),
            Some(Err(())) => {
                let err = self.classify_failure();
                trace!("lexing stopped: {}", err);
                self.failure = Some(err.clone());
                return Err(err);
            }
        };

        trace!("token {:?} {:?} at {}", token.kind, token.text, token.position);
        Ok(token)
    }

    fn classify(&self, raw: RawToken) -> Token {
        let position = self.location.byte_to_position(self.inner.span().start);
        let kind = match raw {
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Terminal(text) => return Token::new(TokenKind::Terminal, text, position),
            RawToken::Comment(text) => return Token::new(TokenKind::Comment, text, position),
            RawToken::ColonEquals => TokenKind::Operator(Operator::ColonEquals),
            RawToken::Equals => TokenKind::Operator(Operator::Equals),
            RawToken::Colon => TokenKind::Operator(Operator::Colon),
            RawToken::Semicolon => TokenKind::Operator(Operator::Semicolon),
            RawToken::Period => TokenKind::Operator(Operator::Period),
            RawToken::Comma => TokenKind::Operator(Operator::Comma),
            RawToken::Pipe => TokenKind::Operator(Operator::Pipe),
            RawToken::OpenParen => TokenKind::Operator(Operator::OpenParen),
            RawToken::CloseParen => TokenKind::Operator(Operator::CloseParen),
            RawToken::OpenBracket => TokenKind::Operator(Operator::OpenBracket),
            RawToken::CloseBracket => TokenKind::Operator(Operator::CloseBracket),
            RawToken::OpenBrace => TokenKind::Operator(Operator::OpenBrace),
            RawToken::CloseBrace => TokenKind::Operator(Operator::CloseBrace),
            RawToken::Minus => TokenKind::Operator(Operator::Minus),
        };
        Token::new(kind, self.inner.slice(), position)
    }

    fn classify_failure(&self) -> LexError {
        let slice = self.inner.slice();
        let position = self.location.byte_to_position(self.inner.span().start);

        if slice.starts_with('"') || slice.starts_with('\'') {
            LexError::UnterminatedLiteral { position }
        } else if slice.starts_with("(*") {
            LexError::UnterminatedComment { position }
        } else {
            LexError::UnexpectedCharacter {
                character: slice.chars().next().unwrap_or('\u{FFFD}'),
                position,
            }
        }
    }
}
