//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::DoubleLiteral(text) => format!("double literal '{text}'"),
            TokenKind::Return => "'return' keyword".to_string(),
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Percent => "'%'".to_string(),
            TokenKind::Error(_) => "lexing error".to_string(),
            TokenKind::Eof => "end of file".to_string(),
        }
    }

    /// Returns a reference to the token `offset` positions ahead, with
    /// `peek(0)` as the current token.
    ///
    /// Peeking past the end of the stream returns the terminal token.
    /// Grammar dispatch never needs more than `peek(1)`.
    pub(super) fn peek(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns a reference to the current token.
    pub(super) fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns the span of the most recently consumed token.
    ///
    /// Falls back to the current span when nothing has been consumed yet.
    pub(super) fn previous_span(&self) -> Span {
        if self.pos == 0 {
            self.current_span()
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    /// Builds a span from the start of `start` to the end of the most
    /// recently consumed token.
    pub(super) fn span_from(&self, start: Span) -> Span {
        Span::new(start.start, self.previous_span().end, start.line, start.column)
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing at the terminal token.
    pub(super) fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    /// Fails with the lexer's message if the current token is an `Error`
    /// token.
    pub(super) fn bail_on_lex_error(&self) -> Result<(), ParseError> {
        if let TokenKind::Error(message) = self.current_kind() {
            Err(ParseError::lex(message, self.current_span()))
        } else {
            Ok(())
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// An `Error` token fails with the lexer's message instead of a
    /// mismatch message.
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        self.bail_on_lex_error()?;
        if self.current_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                &Self::token_kind_display(expected),
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        self.bail_on_lex_error()?;
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::unexpected_token(
                "identifier",
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }
}
