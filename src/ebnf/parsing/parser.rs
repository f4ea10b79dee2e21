//! Recursive descent parser
//!
//! One method per production, one token of lookahead, no backtracking. Nesting is capped at
//! [MAX_NESTING] so that deeply bracketed input fails with a [ParseError] instead of
//! exhausting the stack. Productions below the
//! rule level build their nodes detached and hand them back to the caller, which attaches them
//! once it knows whether a wrapper is needed: a `sequence` or `choice` node is only allocated
//! when there is more than one term or alternative.
//!
//! Comments are buffered by [Parser::advance] as they are skipped. Each production drains the
//! buffer into the container it is building right before the next construct, and once more
//! before it closes, so no comment is ever dropped.

use super::error::{Error, ParseError};
use crate::ebnf::ast::{Ast, NodeId};
use crate::ebnf::lexing::Lexer;
use crate::ebnf::token::{Operator, Token, TokenKind};
use log::{debug, trace};

/// Deepest nesting of groups, options, repetitions and chained exceptions accepted
pub const MAX_NESTING: usize = 128;

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    comments: Vec<Token>,
    /// Open enclosures and exceptions around the current token
    nesting: usize,
    ast: Ast,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            current: Token::end_of_input(Default::default()),
            comments: Vec::new(),
            nesting: 0,
            ast: Ast::new(),
        }
    }

    /// Parse the whole source into a tree
    pub fn parse(mut self) -> Result<Ast, Error> {
        self.advance()?;

        if self.current.kind == TokenKind::Terminal {
            let title = self.advance()?;
            self.ast.set_title(title.text);
        }

        let framed = self.current.is_operator(Operator::OpenBrace);
        if framed {
            self.advance()?;
        }

        let root = self.ast.root_id();
        while self.current.kind == TokenKind::Identifier {
            self.flush_comments(root);
            self.parse_rule(root)?;
        }

        if framed {
            self.flush_comments(root);
            self.expect(Operator::CloseBrace)?;
            if self.current.kind == TokenKind::Terminal {
                let meta = self.advance()?;
                self.ast.set_meta(meta.text);
            }
        }

        self.flush_comments(root);
        if !self.current.is_end() {
            return Err(self.unexpected(if framed { "end of input" } else { "rule" }));
        }

        debug!("parsed {} rule(s)", self.ast.root().child_count());
        Ok(self.ast)
    }

    /// Rule := Identifier ( '=' | ':' | ':==' ) Expression ( ';' | '.' )
    fn parse_rule(&mut self, parent: NodeId) -> Result<NodeId, Error> {
        let name = self.advance()?;
        debug!("rule '{}' at {}", name.text, name.position);

        let rule = self.ast.rule(Some(parent), name.text.as_str());
        self.ast.identifier(Some(rule), name.text);

        match self.current.kind {
            TokenKind::Operator(op) if op.is_definition() => {
                self.advance()?;
            }
            _ => return Err(self.unexpected("'='")),
        }

        if !self.current.starts_term() {
            return Err(self.unexpected("expression"));
        }

        self.flush_comments(rule);
        for item in self.parse_expression()? {
            self.ast.append(rule, item);
        }
        self.flush_comments(rule);

        match self.current.kind {
            TokenKind::Operator(op) if op.is_terminator() => {
                self.advance()?;
                Ok(rule)
            }
            _ => Err(self.unexpected("';' or '.'")),
        }
    }

    /// Expression := Sequence { '|' Sequence }
    fn parse_expression(&mut self) -> Result<Vec<NodeId>, Error> {
        let mut alternatives = vec![self.parse_sequence()?];
        while self.current.is_operator(Operator::Pipe) {
            self.advance()?;
            alternatives.push(self.parse_sequence()?);
        }

        if alternatives.len() == 1 {
            return Ok(alternatives.pop().unwrap_or_default());
        }

        trace!("choice of {} alternatives", alternatives.len());
        let choice = self.ast.choice(None);
        for item in alternatives.into_iter().flatten() {
            self.ast.append(choice, item);
        }
        Ok(vec![choice])
    }

    /// Sequence := Term { [ ',' ] Term }
    fn parse_sequence(&mut self) -> Result<Vec<NodeId>, Error> {
        let mut items = Vec::new();
        let mut terms = 0;

        loop {
            items.extend(self.take_comments());
            items.push(self.parse_term()?);
            terms += 1;

            if self.current.is_operator(Operator::Comma) {
                self.advance()?;
            } else if !self.current.starts_term() {
                break;
            }
        }
        items.extend(self.take_comments());

        if terms == 1 {
            return Ok(items);
        }

        trace!("sequence of {} terms", terms);
        let sequence = self.ast.sequence(None);
        for item in items {
            self.ast.append(sequence, item);
        }
        Ok(vec![sequence])
    }

    /// Term := Factor { '-' Factor }
    ///
    /// Exceptions associate to the left: `a - b - c` is `(a - b) - c`.
    fn parse_term(&mut self) -> Result<NodeId, Error> {
        let mut term = self.parse_factor()?;
        let mut chained = 0;

        while self.current.is_operator(Operator::Minus) {
            self.descend()?;
            chained += 1;

            let exception = self.ast.exception(None);
            self.ast.append(exception, term);
            self.advance()?;
            for comment in self.take_comments() {
                self.ast.append(exception, comment);
            }
            let excluded = self.parse_factor()?;
            self.ast.append(exception, excluded);
            term = exception;
        }

        self.nesting -= chained;
        Ok(term)
    }

    /// Factor := Identifier | Terminal | '(' Expression ')' | '[' Expression ']' | '{' Expression '}'
    fn parse_factor(&mut self) -> Result<NodeId, Error> {
        match self.current.kind {
            TokenKind::Identifier => {
                let token = self.advance()?;
                Ok(self.ast.identifier(None, token.text))
            }
            TokenKind::Terminal => {
                let token = self.advance()?;
                Ok(self.ast.terminal(None, token.text))
            }
            TokenKind::Operator(Operator::OpenParen) => {
                let group = self.ast.group(None);
                self.parse_enclosed(group, Operator::CloseParen)
            }
            TokenKind::Operator(Operator::OpenBracket) => {
                let optional = self.ast.optional(None);
                self.parse_enclosed(optional, Operator::CloseBracket)
            }
            TokenKind::Operator(Operator::OpenBrace) => {
                let repetition = self.ast.repetition(None);
                self.parse_enclosed(repetition, Operator::CloseBrace)
            }
            _ => Err(self.unexpected("term")),
        }
    }

    /// Fill `node` with the expression between the current opening symbol and `close`
    fn parse_enclosed(&mut self, node: NodeId, close: Operator) -> Result<NodeId, Error> {
        self.descend()?;
        self.advance()?;
        if !self.current.starts_term() {
            return Err(self.unexpected("expression"));
        }

        for item in self.parse_expression()? {
            self.ast.append(node, item);
        }
        self.flush_comments(node);
        self.expect(close)?;
        self.nesting -= 1;
        Ok(node)
    }

    /// Count one more level of nesting, failing past [MAX_NESTING]
    fn descend(&mut self) -> Result<(), Error> {
        if self.nesting >= MAX_NESTING {
            return Err(self.unexpected(format!("at most {} nested constructs", MAX_NESTING)));
        }
        self.nesting += 1;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Token handling
    // ------------------------------------------------------------------

    /// Move to the next non-comment token and return the one just consumed
    fn advance(&mut self) -> Result<Token, Error> {
        loop {
            let token = self.lexer.next_token()?;
            if token.kind == TokenKind::Comment {
                self.comments.push(token);
                continue;
            }
            return Ok(std::mem::replace(&mut self.current, token));
        }
    }

    fn expect(&mut self, op: Operator) -> Result<Token, Error> {
        if self.current.is_operator(op) {
            self.advance()
        } else {
            Err(self.unexpected(format!("'{}'", op)))
        }
    }

    /// Detached comment nodes for every buffered comment
    fn take_comments(&mut self) -> Vec<NodeId> {
        let comments = std::mem::take(&mut self.comments);
        comments
            .into_iter()
            .map(|token| self.ast.comment(None, token.text))
            .collect()
    }

    fn flush_comments(&mut self, parent: NodeId) {
        for comment in std::mem::take(&mut self.comments) {
            self.ast.comment(Some(parent), comment.text);
        }
    }

    fn unexpected(&self, expected: impl Into<String>) -> Error {
        ParseError::unexpected(expected, &self.current).into()
    }
}
