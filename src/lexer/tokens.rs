//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the individual token types from
//! the input: punctuation, identifiers, the `return` keyword, and double
//! literals.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Creates an `Error` token spanning from the given start to the current
    /// position.
    fn error_token(
        &self,
        message: String,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        let span = Span::new(start_pos, self.pos.max(start_pos + 1), start_line, start_column);
        Token::new(TokenKind::Error(message), span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// Called repeatedly by [`tokenize`](super::Lexer::tokenize); assumes
    /// whitespace has already been skipped and at least one character
    /// remains. Malformed input yields a [`TokenKind::Error`] token.
    pub(super) fn next_token(&mut self) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        // skip_whitespace/is_eof guarantee a character is present
        let Some(c) = self.current_char() else {
            return self.error_token(
                "Unexpected end of input.".to_string(),
                start_pos,
                start_line,
                start_column,
            );
        };

        if let Some(kind) = Self::punctuation_kind(c) {
            return self.single_char_token(kind, start_pos, start_line, start_column);
        }

        if c.is_ascii_alphabetic() {
            return self.read_identifier(start_pos, start_line, start_column);
        }

        if c.is_ascii_digit() {
            return self.read_double(start_pos, start_line, start_column);
        }

        self.advance();
        self.error_token(
            format!("Unknown character: '{c}'."),
            start_pos,
            start_line,
            start_column,
        )
    }

    /// Maps a punctuation character to its token kind.
    fn punctuation_kind(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            '=' => Some(TokenKind::Equals),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '%' => Some(TokenKind::Percent),
            _ => None,
        }
    }

    /// Reads an identifier or the `return` keyword from the input.
    ///
    /// Consumes the maximal run of ASCII alphanumerics and underscores, then
    /// checks the lexeme against the keyword set. Maximal munch first means
    /// `return_x` is a single identifier, not `return` followed by `_x`.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match value {
            "return" => TokenKind::Return,
            _ => TokenKind::Identifier(value.to_string()),
        };

        Token::new(kind, span)
    }

    /// Reads a double literal from the input.
    ///
    /// A double literal is a maximal run of digits, a decimal point, and a
    /// further maximal run of at least one digit. The token payload is the
    /// exact source text; conversion to `f64` happens in the parser.
    ///
    /// A missing decimal point or a missing fractional digit yields an
    /// `Error` token describing the offending character.
    fn read_double(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        match self.current_char() {
            Some('.') => self.advance(),
            Some(c) => {
                self.advance();
                return self.error_token(
                    format!("Unexpected character: '{c}', expected a decimal point."),
                    start_pos,
                    start_line,
                    start_column,
                );
            }
            None => {
                return self.error_token(
                    "Unexpected end of input, expected a decimal point.".to_string(),
                    start_pos,
                    start_line,
                    start_column,
                );
            }
        }

        match self.current_char() {
            Some(c) if c.is_ascii_digit() => {}
            Some(c) => {
                self.advance();
                return self.error_token(
                    format!("Unexpected character: '{c}', expected a digit."),
                    start_pos,
                    start_line,
                    start_column,
                );
            }
            None => {
                return self.error_token(
                    "Unexpected end of input, expected a digit.".to_string(),
                    start_pos,
                    start_line,
                    start_column,
                );
            }
        }

        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let value = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::DoubleLiteral(value), span)
    }
}
