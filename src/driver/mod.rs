//! Compilation pipeline orchestration for the krait CLI.
//!
//! The driver runs the frontend stages (lex, parse, codegen) in order,
//! stopping at the stage the user selected, and returns that stage's
//! textual result: one rendered token per line, the AST tree dump, or the
//! LLVM IR. Errors from every stage are unified into [`CompileError`] for
//! reporting.

use clap::ValueEnum;
use inkwell::context::Context;

use krait::ast::print::tree_string;
use krait::codegen::{Codegen, CodegenError};
use krait::lexer::Lexer;
use krait::parser::{ParseError, Parser};
use krait::token::{Span, Token, TokenKind};

/// The pipeline stage after which the driver stops and prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Emit {
    /// Stop after lexing and print the token stream.
    Tokens,
    /// Stop after parsing and print the AST.
    Ast,
    /// Run the full pipeline and print the LLVM IR.
    Ir,
}

/// A compilation error from any stage of the pipeline.
pub(crate) enum CompileError {
    /// The lexer appended an `Error` token; its message and location.
    Lex { message: String, span: Span },
    /// An error during parsing.
    Parse(ParseError),
    /// An error during code generation.
    Codegen(CodegenError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex { message, span } => {
                write!(f, "{}:{}: {}", span.line, span.column, message)
            }
            CompileError::Parse(e) => write!(f, "{}", e),
            CompileError::Codegen(e) => write!(f, "{}", e),
        }
    }
}

/// Renders a token stream one token per line.
fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Returns the terminal `Error` token's message and span, if the stream
/// ends in one.
fn lex_failure(tokens: &[Token]) -> Option<CompileError> {
    match tokens.last() {
        Some(Token {
            kind: TokenKind::Error(message),
            span,
        }) => Some(CompileError::Lex {
            message: message.clone(),
            span: *span,
        }),
        _ => None,
    }
}

/// Runs the pipeline on `source` up to the requested stage and returns the
/// stage's textual result.
///
/// `module_name` names the LLVM module (conventionally the source file
/// stem).
pub(crate) fn compile(
    source: &str,
    module_name: &str,
    emit: Emit,
) -> Result<String, CompileError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();

    if emit == Emit::Tokens {
        // The token stream is the requested output either way; a terminal
        // Error token still fails the run after the stream is complete.
        return match lex_failure(&tokens) {
            Some(error) => Err(error),
            None => Ok(render_tokens(&tokens)),
        };
    }

    let mut parser = Parser::new(tokens);
    let program = parser.parse().map_err(CompileError::Parse)?;

    if emit == Emit::Ast {
        return Ok(tree_string(&program));
    }

    let context = Context::create();
    let mut codegen = Codegen::new(&context, module_name);
    codegen.compile(&program).map_err(CompileError::Codegen)?;

    Ok(codegen.print_ir())
}
