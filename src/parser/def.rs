//! Definition parsing.
//!
//! Top-level definitions are either function definitions or global variable
//! definitions. Both start with an identifier; the token after it decides
//! which production applies.

use super::Parser;
use super::error::ParseError;
use crate::ast::{DefKind, Definition};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single top-level definition.
    ///
    /// The definition kind is disambiguated by one token of lookahead after
    /// the leading identifier: `(` starts a function, anything else is
    /// parsed as a variable definition (whose `=` is then enforced).
    pub(super) fn parse_definition(&mut self) -> Result<Definition, ParseError> {
        match &self.peek(1).kind {
            TokenKind::LeftParen => self.parse_function(),
            _ => self.parse_variable(),
        }
    }

    /// Parses a global variable definition: `IDENTIFIER "=" expr ";"`.
    fn parse_variable(&mut self) -> Result<Definition, ParseError> {
        let start_span = self.current_span();

        let name = self.expect_identifier()?;
        self.expect(&TokenKind::Equals)?;
        let value = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Definition::new(
            DefKind::Variable { name, value },
            self.span_from(start_span),
        ))
    }

    /// Parses a function definition:
    /// `IDENTIFIER "(" params? ")" "{" stmt* "}"`.
    fn parse_function(&mut self) -> Result<Definition, ParseError> {
        let start_span = self.current_span();

        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                params.push(self.expect_identifier()?);
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::LeftBrace)?;

        let mut body = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            self.bail_on_lex_error()?;
            body.push(self.parse_stmt()?);
        }

        self.expect(&TokenKind::RightBrace)?;

        Ok(Definition::new(
            DefKind::Function { name, params, body },
            self.span_from(start_span),
        ))
    }
}
