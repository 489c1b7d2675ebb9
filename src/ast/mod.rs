//! Abstract Syntax Tree definitions for the krait language.
//!
//! This module defines the data structures that represent parsed krait
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::codegen`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node containing all top-level definitions
//! - [`Definition`] - A function definition or a global variable definition
//! - [`Stmt`] - Individual statements (return, discard, assignment)
//! - [`Expr`] - Expressions (literals, identifiers, calls, arithmetic)
//!
//! Each node pairs a kind with a source [`Span`](crate::token::Span).
//! Equality on AST nodes is structural: it compares kinds recursively and
//! ignores spans, so two parses of the same program compare equal no matter
//! how it was formatted. Definition order is significant.
//!
//! # Rendering
//!
//! AST types implement `Display` by rendering re-parseable source text; the
//! [`print`] module additionally provides an indented tree dump for
//! debugging and driver output.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::codegen`] - Generates LLVM IR from the AST

mod def;
mod expr;
pub mod print;
mod stmt;


pub use def::{DefKind, Definition, Program};
pub use expr::{Expr, ExprKind};
pub use stmt::{Stmt, StmtKind};
