//! Top-level definitions and the program root for the krait AST.

use crate::token::Span;

use super::expr::Expr;
use super::stmt::Stmt;

/// The kind of a top-level definition.
#[derive(Debug, Clone, PartialEq)]
pub enum DefKind {
    /// A function definition.
    Function {
        /// The function name.
        name: String,
        /// The parameter names, in declaration order.
        params: Vec<String>,
        /// The statements that make up the function body.
        body: Vec<Stmt>,
    },

    /// A global variable definition.
    ///
    /// A top-level assignment both defines the global and contributes its
    /// initializer; when the same name is defined again, the later
    /// initializer wins.
    Variable {
        /// The variable name.
        name: String,
        /// The initializer expression.
        value: Expr,
    },
}

/// A top-level definition with its source location.
#[derive(Debug, Clone)]
pub struct Definition {
    /// The kind of definition.
    pub kind: DefKind,
    /// The source location of this definition.
    pub span: Span,
}

impl Definition {
    /// Creates a new definition with the given kind and span.
    pub fn new(kind: DefKind, span: Span) -> Self {
        Definition { kind, span }
    }

    /// Returns the defined name.
    pub fn name(&self) -> &str {
        match &self.kind {
            DefKind::Function { name, .. } => name,
            DefKind::Variable { name, .. } => name,
        }
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// The root node of a krait program's AST.
///
/// A `Program` is an ordered sequence of definitions; a well-formed program
/// contains at least one. Two programs are structurally equal only when
/// their definition sequences match positionwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level definitions, in source order.
    pub definitions: Vec<Definition>,
}
