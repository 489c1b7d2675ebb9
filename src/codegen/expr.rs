//! Expression code generation.
//!
//! Lowers an expression tree to a single IR value. Every language value is
//! a `double`; named values are pointers, so identifier reads are explicit
//! loads.

use super::Codegen;
use super::error::CodegenError;
use crate::ast::{Expr, ExprKind};
use crate::token::Span;
use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum, FloatValue};

impl<'ctx> Codegen<'ctx> {
    /// Generates LLVM IR for an expression and returns its value.
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] if an identifier does not resolve in the
    /// active scopes, a called function is unknown or called with the wrong
    /// arity, or the builder fails.
    pub(super) fn generate_expr(&mut self, expr: &Expr) -> Result<FloatValue<'ctx>, CodegenError> {
        match &expr.kind {
            ExprKind::DoubleLiteral(value) => Ok(self.context.f64_type().const_float(*value)),
            ExprKind::Identifier(name) => {
                let slot = self
                    .values
                    .get(name)
                    .ok_or_else(|| CodegenError::unknown_identifier(name, expr.span))?;
                let loaded = self
                    .builder
                    .build_load(slot, &format!("{name}_load"))
                    .map_err(|e| CodegenError::llvm("load", &e.to_string(), Some(expr.span)))?;
                Ok(loaded.into_float_value())
            }
            ExprKind::Parenthesised(inner) => self.generate_expr(inner),
            ExprKind::Neg(inner) => {
                let value = self.generate_expr(inner)?;
                self.builder
                    .build_float_neg(value, "neg_tmp")
                    .map_err(|e| CodegenError::llvm("fneg", &e.to_string(), Some(expr.span)))
            }
            ExprKind::Add(lhs, rhs) => {
                let lhs = self.generate_expr(lhs)?;
                let rhs = self.generate_expr(rhs)?;
                self.builder
                    .build_float_add(lhs, rhs, "add_tmp")
                    .map_err(|e| CodegenError::llvm("fadd", &e.to_string(), Some(expr.span)))
            }
            ExprKind::Sub(lhs, rhs) => {
                let lhs = self.generate_expr(lhs)?;
                let rhs = self.generate_expr(rhs)?;
                self.builder
                    .build_float_sub(lhs, rhs, "sub_tmp")
                    .map_err(|e| CodegenError::llvm("fsub", &e.to_string(), Some(expr.span)))
            }
            ExprKind::Mul(lhs, rhs) => {
                let lhs = self.generate_expr(lhs)?;
                let rhs = self.generate_expr(rhs)?;
                self.builder
                    .build_float_mul(lhs, rhs, "mul_tmp")
                    .map_err(|e| CodegenError::llvm("fmul", &e.to_string(), Some(expr.span)))
            }
            ExprKind::Div(lhs, rhs) => {
                let lhs = self.generate_expr(lhs)?;
                let rhs = self.generate_expr(rhs)?;
                self.builder
                    .build_float_div(lhs, rhs, "div_tmp")
                    .map_err(|e| CodegenError::llvm("fdiv", &e.to_string(), Some(expr.span)))
            }
            ExprKind::Mod(lhs, rhs) => {
                // frem: the result carries the sign of the dividend.
                let lhs = self.generate_expr(lhs)?;
                let rhs = self.generate_expr(rhs)?;
                self.builder
                    .build_float_rem(lhs, rhs, "rem_tmp")
                    .map_err(|e| CodegenError::llvm("frem", &e.to_string(), Some(expr.span)))
            }
            ExprKind::Call { callee, args } => self.generate_call(callee, args, expr.span),
        }
    }

    /// Generates a call to a function in the module.
    ///
    /// Arguments are lowered left-to-right in textual order. The callee is
    /// looked up by name and its arity must match exactly. A name absent
    /// from the module resolves as a runtime helper (declared on first
    /// use) or fails; helper names are not reserved, so a user-defined
    /// function that already claimed the name wins the lookup.
    fn generate_call(
        &mut self,
        callee: &str,
        args: &[Expr],
        span: Span,
    ) -> Result<FloatValue<'ctx>, CodegenError> {
        let function = match self.module.get_function(callee) {
            Some(function) => function,
            None => self
                .runtime_helper(callee)
                .ok_or_else(|| CodegenError::unknown_function(callee, span))?,
        };

        if function.count_params() as usize != args.len() {
            return Err(CodegenError::arity_mismatch(
                callee,
                function.count_params() as usize,
                args.len(),
                span,
            ));
        }

        let mut arg_values: Vec<BasicMetadataValueEnum<'ctx>> = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.generate_expr(arg)?.into());
        }

        let call = self
            .builder
            .build_call(function, &arg_values, "call_tmp")
            .map_err(|e| CodegenError::llvm("call", &e.to_string(), Some(span)))?;

        match call.try_as_basic_value().basic() {
            Some(BasicValueEnum::FloatValue(value)) => Ok(value),
            _ => Err(CodegenError::call_result_not_double(callee, span)),
        }
    }
}
