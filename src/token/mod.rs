//! Token definitions for the krait lexer.
//!
//! This module provides the fundamental token types used throughout the
//! compiler. It defines [`Span`] for source location tracking, [`TokenKind`]
//! for token types, and [`Token`] for representing lexical units with their
//! positions.
//!
//! # Overview
//!
//! The lexer produces a vector of [`Token`]s, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - A [`Span`] indicating where in the source code it appears
//!
//! Tokens render to the textual form used by diagnostics and by the driver's
//! token output: the grammar label, optionally followed by the payload in
//! braces (e.g. `IDENTIFIER{pi}`, `SEMICOLON`, `END`).
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod span;

pub use kind::TokenKind;
pub use span::Span;

use std::fmt;

/// A token with its kind and source location.
///
/// `Token` combines a [`TokenKind`] with a [`Span`], allowing the parser and
/// the error reporting layer to know both what kind of token was found and
/// where it appeared in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new `Token` with the given kind and span.
    ///
    /// This is a simple constructor that performs no validation. The caller
    /// is responsible for ensuring the span corresponds to the token's
    /// position in the source.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
