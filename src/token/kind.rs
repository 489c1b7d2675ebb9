//! Token kinds for the krait lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the krait language, together with their textual rendering.

use std::fmt;

/// The kind of token recognized by the lexer.
///
/// Payload-carrying variants hold the relevant source text: the lexeme for
/// identifiers, the exact textual form for double literals, and the
/// diagnostic message for error tokens. All other variants are fixed tags.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An identifier (function name, variable name, parameter name).
    ///
    /// Identifiers start with an ASCII letter, followed by any number of
    /// ASCII alphanumeric characters or underscores.
    Identifier(String),

    /// A double literal, e.g. `3.14`.
    ///
    /// The payload is the exact textual form from the source: at least one
    /// digit, a decimal point, and at least one further digit. Conversion to
    /// `f64` happens in the parser.
    DoubleLiteral(String),

    /// The `return` keyword.
    Return,

    /// A left parenthesis `(`.
    LeftParen,

    /// A right parenthesis `)`.
    RightParen,

    /// A left brace `{`.
    LeftBrace,

    /// A right brace `}`.
    RightBrace,

    /// A comma `,`.
    Comma,

    /// A semicolon `;`.
    Semicolon,

    /// An equals sign `=` for assignments and variable definitions.
    Equals,

    /// A plus sign `+` for addition.
    Plus,

    /// A minus sign `-` for subtraction and numeric negation.
    Minus,

    /// An asterisk `*` for multiplication.
    Star,

    /// A forward slash `/` for division.
    Slash,

    /// A percent sign `%` for the remainder operation.
    Percent,

    /// A lexing failure, carrying the diagnostic message.
    ///
    /// When the lexer encounters malformed input it appends this token and
    /// stops, so the failure is visible to anything observing only the token
    /// stream. An `Error` token is always the last token of its stream.
    Error(String),

    /// End of input marker.
    ///
    /// The lexer appends this as the final token of every successful run,
    /// ensuring the token stream is never empty.
    Eof,
}

impl fmt::Display for TokenKind {
    /// Renders the token in its grammar-label form, e.g. `IDENTIFIER{pi}`,
    /// `DOUBLE_LITERAL{3.14}`, `LPAR`, `ASSIGN`, `END`.
    ///
    /// The payload in braces is appended only when it is non-empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "IDENTIFIER{{{name}}}"),
            TokenKind::DoubleLiteral(text) => write!(f, "DOUBLE_LITERAL{{{text}}}"),
            TokenKind::Return => write!(f, "RETURN"),
            TokenKind::LeftParen => write!(f, "LPAR"),
            TokenKind::RightParen => write!(f, "RPAR"),
            TokenKind::LeftBrace => write!(f, "LBRAC"),
            TokenKind::RightBrace => write!(f, "RBRAC"),
            TokenKind::Comma => write!(f, "COMMA"),
            TokenKind::Semicolon => write!(f, "SEMICOLON"),
            TokenKind::Equals => write!(f, "ASSIGN"),
            TokenKind::Plus => write!(f, "PLUS"),
            TokenKind::Minus => write!(f, "MINUS"),
            TokenKind::Star => write!(f, "STAR"),
            TokenKind::Slash => write!(f, "SLASH"),
            TokenKind::Percent => write!(f, "PERCENT"),
            TokenKind::Error(message) => {
                if message.is_empty() {
                    write!(f, "ERROR")
                } else {
                    write!(f, "ERROR{{{message}}}")
                }
            }
            TokenKind::Eof => write!(f, "END"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_identifier() {
        let kind = TokenKind::Identifier("get_pi".to_string());
        assert!(matches!(kind, TokenKind::Identifier(ref s) if s == "get_pi"));
    }

    #[test]
    fn test_token_kind_double_literal() {
        let kind = TokenKind::DoubleLiteral("3.14".to_string());
        assert!(matches!(kind, TokenKind::DoubleLiteral(ref s) if s == "3.14"));
    }

    #[test]
    fn test_token_kind_partial_eq() {
        let kind1 = TokenKind::Identifier("foo".to_string());
        let kind2 = TokenKind::Identifier("foo".to_string());
        let kind3 = TokenKind::Identifier("bar".to_string());

        assert_eq!(kind1, kind2);
        assert_ne!(kind1, kind3);
        assert_eq!(TokenKind::LeftParen, TokenKind::LeftParen);
        assert_ne!(TokenKind::LeftParen, TokenKind::RightParen);
    }

    #[test]
    fn test_display_fixed_tags() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LPAR");
        assert_eq!(TokenKind::RightParen.to_string(), "RPAR");
        assert_eq!(TokenKind::LeftBrace.to_string(), "LBRAC");
        assert_eq!(TokenKind::RightBrace.to_string(), "RBRAC");
        assert_eq!(TokenKind::Comma.to_string(), "COMMA");
        assert_eq!(TokenKind::Semicolon.to_string(), "SEMICOLON");
        assert_eq!(TokenKind::Equals.to_string(), "ASSIGN");
        assert_eq!(TokenKind::Return.to_string(), "RETURN");
        assert_eq!(TokenKind::Plus.to_string(), "PLUS");
        assert_eq!(TokenKind::Minus.to_string(), "MINUS");
        assert_eq!(TokenKind::Star.to_string(), "STAR");
        assert_eq!(TokenKind::Slash.to_string(), "SLASH");
        assert_eq!(TokenKind::Percent.to_string(), "PERCENT");
        assert_eq!(TokenKind::Eof.to_string(), "END");
    }

    #[test]
    fn test_display_payloads() {
        assert_eq!(
            TokenKind::Identifier("pi".to_string()).to_string(),
            "IDENTIFIER{pi}"
        );
        assert_eq!(
            TokenKind::DoubleLiteral("0.5".to_string()).to_string(),
            "DOUBLE_LITERAL{0.5}"
        );
        assert_eq!(
            TokenKind::Error("Unknown character: '#'.".to_string()).to_string(),
            "ERROR{Unknown character: '#'.}"
        );
    }
}
