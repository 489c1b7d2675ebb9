//! Parse error types.

use crate::token::Span;

/// The category of a parse error, for structured matching in tests and
/// tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A specific terminal was required and something else was found.
    UnexpectedToken,
    /// The input contained no definitions.
    EmptyProgram,
    /// A double literal could not be converted to a finite `f64`.
    InvalidDoubleLiteral,
    /// An `Error` token from the lexer reached the parser.
    Lex,
}

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message naming the offending
/// token and the source location where the error occurred, enabling rich
/// error reporting with `ariadne`.
#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    span: Span,
}

impl ParseError {
    /// Returns the error category.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the detailed error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short title for report headers.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken => "Unexpected token",
            ParseErrorKind::EmptyProgram => "Empty program",
            ParseErrorKind::InvalidDoubleLiteral => "Invalid double literal",
            ParseErrorKind::Lex => "Lexing failed",
        }
    }

    /// Returns the source location of the error.
    pub fn span(&self) -> Span {
        self.span
    }

    /// A specific terminal was expected and a different token was found.
    pub(super) fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: format!("Expected {expected}, found {found}"),
            span,
        }
    }

    /// A token that cannot start an expression was found in expression
    /// position.
    pub(super) fn unexpected_expression_start(found: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: format!("Expected an expression, found {found}"),
            span,
        }
    }

    /// The token stream held no definitions before the end of input.
    pub(super) fn empty_program(span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::EmptyProgram,
            message: "A program must contain at least one definition".to_string(),
            span,
        }
    }

    /// A double literal did not convert to a finite `f64`.
    pub(super) fn invalid_double_literal(text: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidDoubleLiteral,
            message: format!("Double literal '{text}' is out of range"),
            span,
        }
    }

    /// An `Error` token from the lexer was encountered; the lexer's message
    /// is attributed.
    pub(super) fn lex(message: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::Lex,
            message: message.to_string(),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
