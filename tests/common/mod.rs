//! Common test utilities for krait integration tests.
//!
//! This module provides shared helper functions used across the
//! integration test files.

// Each test file is compiled as a separate crate, so not every helper is
// used in every test file.
#![allow(dead_code)]

use inkwell::context::Context;
use krait::ast::Program;
use krait::codegen::Codegen;
use krait::lexer::Lexer;
use krait::parser::Parser;
use krait::token::Token;

/// Returns the path to the krait binary built by cargo.
pub fn krait_binary() -> String {
    env!("CARGO_BIN_EXE_krait").to_string()
}

/// Lexes source into a token stream.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()
}

/// Lexes and parses source into a program.
pub fn parse(source: &str) -> Result<Program, String> {
    let mut parser = Parser::new(lex(source));
    parser.parse().map_err(|e| e.to_string())
}

/// Compiles source through the whole pipeline and returns the textual IR.
pub fn compile_to_ir(source: &str) -> Result<String, String> {
    let program = parse(source)?;

    let context = Context::create();
    let mut codegen = Codegen::new(&context, "integration_test");
    codegen.compile(&program).map_err(|e| e.to_string())?;

    Ok(codegen.print_ir())
}
