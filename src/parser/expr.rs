//! Expression parsing with precedence climbing.
//!
//! One grammar function per precedence class, each delegating to the next
//! higher class for its left operand and recursing into itself for the
//! right operand. The self-recursion on the right is what makes every
//! binary operator right-associative: `a - b - c` parses as `a - (b - c)`.
//!
//! Precedence, loosest to tightest: `%`, then `+`/`-`, then `*`/`/`, then
//! unary `-`, then primary expressions.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses an expression. Entry point of the precedence chain; this
    /// level owns the `%` operator, which binds loosest.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_additive()?;

        if matches!(self.current_kind(), TokenKind::Percent) {
            self.advance();
            let rhs = self.parse_expr()?;
            let span = join_spans(lhs.span, rhs.span);
            return Ok(Expr::new(ExprKind::Mod(Box::new(lhs), Box::new(rhs)), span));
        }

        Ok(lhs)
    }

    /// Parses an additive expression: `multiplicative (("+"|"-") additive)?`.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_multiplicative()?;

        let make: fn(Box<Expr>, Box<Expr>) -> ExprKind = match self.current_kind() {
            TokenKind::Plus => ExprKind::Add,
            TokenKind::Minus => ExprKind::Sub,
            _ => return Ok(lhs),
        };

        self.advance();
        let rhs = self.parse_additive()?;
        let span = join_spans(lhs.span, rhs.span);
        Ok(Expr::new(make(Box::new(lhs), Box::new(rhs)), span))
    }

    /// Parses a multiplicative expression: `unary (("*"|"/") multiplicative)?`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_unary()?;

        let make: fn(Box<Expr>, Box<Expr>) -> ExprKind = match self.current_kind() {
            TokenKind::Star => ExprKind::Mul,
            TokenKind::Slash => ExprKind::Div,
            _ => return Ok(lhs),
        };

        self.advance();
        let rhs = self.parse_multiplicative()?;
        let span = join_spans(lhs.span, rhs.span);
        Ok(Expr::new(make(Box::new(lhs), Box::new(rhs)), span))
    }

    /// Parses a unary expression: `"-" unary | primary`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.current_kind(), TokenKind::Minus) {
            let start_span = self.current_span();
            self.advance();
            let inner = self.parse_unary()?;
            let span = join_spans(start_span, inner.span);
            return Ok(Expr::new(ExprKind::Neg(Box::new(inner)), span));
        }

        self.parse_primary()
    }

    /// Parses a primary expression: a double literal, a parenthesised
    /// expression, a function call, or an identifier.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind() {
            TokenKind::DoubleLiteral(text) => {
                let text = text.clone();
                self.advance();

                let value: f64 = text
                    .parse()
                    .map_err(|_: std::num::ParseFloatError| {
                        ParseError::invalid_double_literal(&text, start_span)
                    })?;
                if !value.is_finite() {
                    return Err(ParseError::invalid_double_literal(&text, start_span));
                }

                Ok(Expr::new(ExprKind::DoubleLiteral(value), start_span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::new(
                    ExprKind::Parenthesised(Box::new(inner)),
                    self.span_from(start_span),
                ))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();

                if matches!(self.current_kind(), TokenKind::LeftParen) {
                    self.parse_call(name, start_span)
                } else {
                    Ok(Expr::new(ExprKind::Identifier(name), start_span))
                }
            }
            TokenKind::Error(message) => Err(ParseError::lex(message, start_span)),
            other => Err(ParseError::unexpected_expression_start(
                &Self::token_kind_display(other),
                start_span,
            )),
        }
    }

    /// Parses a function call's argument list. The callee identifier has
    /// already been consumed.
    fn parse_call(&mut self, callee: String, start_span: Span) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut args = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RightParen)?;

        Ok(Expr::new(
            ExprKind::Call { callee, args },
            self.span_from(start_span),
        ))
    }
}

/// Builds a span covering both operands of a binary expression.
fn join_spans(start: Span, end: Span) -> Span {
    Span::new(start.start, end.end, start.line, start.column)
}
