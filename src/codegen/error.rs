//! Code generation error types.
//!
//! This module defines [`CodegenError`], which represents errors that can
//! occur during LLVM IR generation.

use crate::token::Span;

/// The category of a code generation error, for structured matching in
/// tests and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenErrorKind {
    /// A name did not resolve in any active scope.
    UnknownIdentifier,
    /// A call named a function that does not exist in the module.
    UnknownFunction,
    /// A call supplied the wrong number of arguments.
    ArityMismatch,
    /// A function name was defined more than once.
    DuplicateFunction,
    /// A call produced something other than a `double` value.
    InvalidCallResult,
    /// The `main` function was defined with parameters.
    InvalidMain,
    /// The underlying IR builder reported a failure.
    Llvm,
}

/// An error that occurred during code generation.
///
/// All codegen failures are fatal and uniform; the module under
/// construction must be discarded by the caller. The span is optional
/// because some failures (module bootstrap, builder internals) have no
/// source location to point at.
#[derive(Debug)]
pub struct CodegenError {
    kind: CodegenErrorKind,
    message: String,
    span: Option<Span>,
}

impl CodegenError {
    /// Returns the error category.
    pub fn kind(&self) -> CodegenErrorKind {
        self.kind
    }

    /// Returns the detailed error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short title for report headers.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            CodegenErrorKind::UnknownIdentifier => "Unknown identifier",
            CodegenErrorKind::UnknownFunction => "Unknown function",
            CodegenErrorKind::ArityMismatch => "Wrong number of arguments",
            CodegenErrorKind::DuplicateFunction => "Duplicate function",
            CodegenErrorKind::InvalidCallResult => "Invalid call result",
            CodegenErrorKind::InvalidMain => "Invalid main function",
            CodegenErrorKind::Llvm => "Code generation failed",
        }
    }

    /// Returns the source location of the error, if one is available.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// A name did not resolve in any active scope.
    pub(super) fn unknown_identifier(name: &str, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::UnknownIdentifier,
            message: format!("Could not find a value for identifier '{name}'"),
            span: Some(span),
        }
    }

    /// A call named a function that does not exist in the module.
    pub(super) fn unknown_function(name: &str, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::UnknownFunction,
            message: format!("Could not find a function named '{name}'"),
            span: Some(span),
        }
    }

    /// A call supplied the wrong number of arguments.
    pub(super) fn arity_mismatch(name: &str, takes: usize, given: usize, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::ArityMismatch,
            message: format!("Function '{name}' takes {takes} arguments, {given} given"),
            span: Some(span),
        }
    }

    /// A function name was defined more than once.
    ///
    /// Also raised when a definition arrives after its name was already
    /// materialized in the module, e.g. a runtime helper declared by an
    /// earlier call.
    pub(super) fn duplicate_function(name: &str, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::DuplicateFunction,
            message: format!("A function named '{name}' already exists"),
            span: Some(span),
        }
    }

    /// A call produced something other than a `double` value.
    pub(super) fn call_result_not_double(name: &str, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::InvalidCallResult,
            message: format!("Call to '{name}' does not produce a double value"),
            span: Some(span),
        }
    }

    /// The `main` function was defined with parameters.
    pub(super) fn main_with_parameters(span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::InvalidMain,
            message: "The 'main' function must take no parameters".to_string(),
            span: Some(span),
        }
    }

    /// The underlying IR builder reported a failure while emitting `what`.
    pub(super) fn llvm(what: &str, detail: &str, span: Option<Span>) -> Self {
        CodegenError {
            kind: CodegenErrorKind::Llvm,
            message: format!("Failed to emit {what}: {detail}"),
            span,
        }
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}: {}", span.line, span.column, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for CodegenError {}
