//! Runtime helper declarations.
//!
//! The language exposes two helpers for output, supplied by the host
//! runtime at link time. The code generator only declares them so that
//! calls resolve; their bodies live outside the module.
//!
//! Helper names are not reserved: a user-defined function with a helper's
//! name enters the module first and wins. A helper is therefore declared
//! lazily, on the first call that does not resolve to anything else, and
//! once more as the final bootstrap step for any helper still absent.

use super::Codegen;
use inkwell::AddressSpace;
use inkwell::module::Linkage;
use inkwell::values::FunctionValue;

/// Names of the runtime helpers declared in every module.
pub const RUNTIME_HELPERS: [&str; 2] = ["printf", "println"];

impl<'ctx> Codegen<'ctx> {
    /// Declares any runtime helpers not already present in the module.
    ///
    /// Runs as the last bootstrap step, after every definition has been
    /// lowered, so a user-defined function carrying a helper's name has
    /// already claimed it and is left untouched.
    pub(super) fn declare_runtime_helpers(&mut self) {
        self.declare_printf();
        self.declare_println();
    }

    /// Resolves `name` as a runtime helper, declaring it on first use.
    ///
    /// Returns `None` for names that are not runtime helpers.
    pub(super) fn runtime_helper(&mut self, name: &str) -> Option<FunctionValue<'ctx>> {
        match name {
            "printf" => Some(self.declare_printf()),
            "println" => Some(self.declare_println()),
            _ => None,
        }
    }

    /// Declares `printf(ptr, ...) -> i32` if not already present.
    fn declare_printf(&mut self) -> FunctionValue<'ctx> {
        if let Some(function) = self.module.get_function("printf") {
            return function;
        }
        let ptr_type = self.context.ptr_type(AddressSpace::default());
        let fn_type = self.context.i32_type().fn_type(&[ptr_type.into()], true);
        self.module
            .add_function("printf", fn_type, Some(Linkage::External))
    }

    /// Declares `println(double) -> double` if not already present.
    fn declare_println(&mut self) -> FunctionValue<'ctx> {
        if let Some(function) = self.module.get_function("println") {
            return function;
        }
        let f64_type = self.context.f64_type();
        let fn_type = f64_type.fn_type(&[f64_type.into()], false);
        self.module
            .add_function("println", fn_type, Some(Linkage::External))
    }
}
