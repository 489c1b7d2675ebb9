//! Lexical analyzer for the krait language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character, skipping whitespace
//! - Recognizes identifiers, the `return` keyword, double literals, and
//!   punctuation
//! - Tracks source positions for error reporting
//!
//! # Supported Tokens
//!
//! - **Keyword**: `return`
//! - **Identifiers**: an ASCII letter followed by ASCII alphanumerics and
//!   underscores. A leading underscore or digit is not an identifier.
//! - **Double literals**: `digits '.' digits`, with at least one digit on
//!   each side of the decimal point (e.g. `3.14`, `0.5`). A bare integer
//!   like `3`, and forms like `3.` or `.5`, are lexing errors.
//! - **Punctuation**: `(`, `)`, `{`, `}`, `,`, `;`, `=`, `+`, `-`, `*`,
//!   `/`, `%`
//!
//! # Failure
//!
//! The token stream itself is the failure channel. On success the stream
//! ends with exactly one [`TokenKind::Eof`]; on malformed input the lexer
//! appends a [`TokenKind::Error`] carrying the diagnostic and stops, so the
//! `Error` token is the terminal token of a failed run. Downstream stages
//! react to it: the parser turns it into a parse failure attributing the
//! lexer's message.
//!
//! # Examples
//!
//! ```
//! use krait::lexer::Lexer;
//! use krait::token::TokenKind;
//!
//! let mut lexer = Lexer::new("pi = 3.14;");
//! let tokens = lexer.tokenize();
//!
//! assert!(matches!(tokens[0].kind, TokenKind::Identifier(_)));
//! assert!(matches!(tokens[1].kind, TokenKind::Equals));
//! assert!(matches!(tokens[2].kind, TokenKind::DoubleLiteral(_)));
//! assert!(matches!(tokens.last().unwrap().kind, TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Position tracking and character navigation
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod tokens;


use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes krait source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used once
/// per source file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns the token stream.
    ///
    /// Consumes the input from start to end. On success the returned vector
    /// ends with exactly one [`TokenKind::Eof`]. If malformed input is
    /// encountered (an unknown character, or a number without a well-formed
    /// decimal part), the vector instead ends with a [`TokenKind::Error`]
    /// token carrying the diagnostic, and lexing stops at that point.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            let token = self.next_token();
            let failed = matches!(token.kind, TokenKind::Error(_));
            tokens.push(token);
            if failed {
                break;
            }
        }

        tokens
    }

    /// Skips consecutive whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }
}
