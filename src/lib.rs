//! The krait language compiler library.
//!
//! This library provides the core components of the krait compiler:
//! lexical analysis, parsing, and LLVM IR generation. krait is a small
//! strictly-typed numeric language whose only value type is a 64-bit
//! float; a program is a sequence of named function and global variable
//! definitions.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions and rendering
//! - [`parser`] - Recursive descent parser
//! - [`codegen`] - LLVM IR generation
//!
//! # Example
//!
//! ```
//! use inkwell::context::Context;
//! use krait::codegen::Codegen;
//! use krait::lexer::Lexer;
//! use krait::parser::Parser;
//!
//! let source = "pi = 3.14;
//! main () {
//!     println(pi);
//!     return 0.0;
//! }";
//!
//! // Lexical analysis
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize();
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().expect("parse error");
//!
//! // Code generation
//! let context = Context::create();
//! let mut codegen = Codegen::new(&context, "example");
//! codegen.compile(&program).expect("codegen error");
//!
//! let ir = codegen.print_ir();
//! assert!(ir.contains("@pi = global double"));
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod token;
