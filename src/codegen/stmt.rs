//! Statement code generation.

use super::Codegen;
use super::error::CodegenError;
use crate::ast::{Expr, Stmt, StmtKind};
use crate::token::Span;
use inkwell::values::PointerValue;

impl<'ctx> Codegen<'ctx> {
    /// Generates LLVM IR for a single statement.
    pub(super) fn generate_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::Return(value) => {
                let value = self.generate_expr(value)?;
                self.builder
                    .build_return(Some(&value))
                    .map_err(|e| CodegenError::llvm("return", &e.to_string(), Some(stmt.span)))?;
                Ok(())
            }
            StmtKind::Discard(expr) => {
                // Evaluated for side effects; the value is dropped.
                self.generate_expr(expr)?;
                Ok(())
            }
            StmtKind::Assignment { name, value } => {
                self.generate_assignment(name, value, stmt.span)
            }
        }
    }

    /// Generates LLVM IR for an assignment inside a function body.
    ///
    /// If the name already resolves (local, parameter, or global), the
    /// value is stored through the existing pointer; assignments re-use
    /// slots rather than creating new bindings. A name with no binding in
    /// any scope gets a fresh stack slot bound in the innermost scope
    /// first, so the initializer is lowered with the binding visible.
    pub(super) fn generate_assignment(
        &mut self,
        name: &str,
        value: &Expr,
        span: Span,
    ) -> Result<(), CodegenError> {
        let slot = match self.values.get(name) {
            Some(slot) => slot,
            None => {
                let slot = self.build_entry_alloca(name, span)?;
                self.values.put(name, slot);
                slot
            }
        };

        let value = self.generate_expr(value)?;
        self.builder
            .build_store(slot, value)
            .map_err(|e| CodegenError::llvm("store", &e.to_string(), Some(span)))?;

        Ok(())
    }

    /// Creates a stack slot in the current function's entry block.
    ///
    /// All of a function's slots live in its entry block, even when the
    /// statement being lowered sits in a later block (dead code after a
    /// return). A separate builder inserts the alloca before the entry
    /// block's terminator when one exists, and at its end otherwise.
    fn build_entry_alloca(
        &self,
        name: &str,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let current = self
            .builder
            .get_insert_block()
            .ok_or_else(|| CodegenError::llvm("alloca", "no active block", Some(span)))?;
        let function = current
            .get_parent()
            .ok_or_else(|| CodegenError::llvm("alloca", "block has no parent", Some(span)))?;
        let entry = function
            .get_first_basic_block()
            .ok_or_else(|| CodegenError::llvm("alloca", "function has no entry block", Some(span)))?;

        let entry_builder = self.context.create_builder();
        match entry.get_terminator() {
            Some(terminator) => entry_builder.position_before(&terminator),
            None => entry_builder.position_at_end(entry),
        }

        entry_builder
            .build_alloca(self.context.f64_type(), name)
            .map_err(|e| CodegenError::llvm("alloca", &e.to_string(), Some(span)))
    }
}
