//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single statement within a function body.
    ///
    /// The statement kind is decided by the current token: `return` starts
    /// a return statement, an identifier directly followed by `=` is an
    /// assignment, and anything else is an expression evaluated for its
    /// side effects.
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();

        match self.current_kind() {
            TokenKind::Return => {
                self.advance();
                let value = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Return(value), self.span_from(start_span)))
            }
            TokenKind::Identifier(_) if matches!(self.peek(1).kind, TokenKind::Equals) => {
                let name = self.expect_identifier()?;
                self.advance(); // consume '='
                let value = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(
                    StmtKind::Assignment { name, value },
                    self.span_from(start_span),
                ))
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Discard(expr), self.span_from(start_span)))
            }
        }
    }
}
