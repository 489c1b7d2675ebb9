//! Statement nodes for the krait AST.

use crate::token::Span;

use super::expr::Expr;

/// The kind of a statement, without source location information.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// A return statement, yielding the value from the enclosing function.
    Return(Expr),

    /// An expression evaluated for its side effects; the result is dropped.
    Discard(Expr),

    /// An assignment to a name.
    ///
    /// Depending on scope, the name resolves to a local, a parameter, or a
    /// global. A first assignment to an unbound name inside a function body
    /// introduces a new local.
    Assignment {
        /// The name being written.
        name: String,
        /// The value expression.
        value: Expr,
    },
}

/// A statement with its source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl PartialEq for Stmt {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}
