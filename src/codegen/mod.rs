//! LLVM code generation for the krait language.
//!
//! This module provides the [`Codegen`] struct which lowers a krait AST
//! into an LLVM IR module.
//!
//! # Overview
//!
//! The code generator uses [Inkwell](https://github.com/TheDan64/inkwell),
//! a safe Rust wrapper around the LLVM C API. Every language value is an
//! IEEE-754 `double`, and every named value (locals, parameters, and
//! globals alike) lives in a pointer-addressed cell, either a stack slot
//! or a module global. Reads and writes go through explicit loads and stores,
//! which keeps the emitted IR SSA-safe without any phi insertion.
//!
//! # Module layout
//!
//! Lowering a program produces these module-level symbols:
//!
//! - one external, zero-initialized `double` global per top-level variable
//!   definition, named exactly as written;
//! - `global_var_init` (internal, `void ()`): the accumulated top-level
//!   initializer stores, in source order, so a repeated definition's last
//!   store wins;
//! - `llvm.global_ctors` (appending linkage): a one-element constructor
//!   array `{ 65535, @global_var_init, null }` that makes the host linker
//!   run the initializers before `main`;
//! - external declarations for the runtime helpers `printf` and `println`,
//!   added only where no definition has claimed the name (helper names are
//!   not reserved; a user-defined function with a helper's name wins);
//! - one function per function definition, named as written, except
//!   `main`, which is lowered as `main_` and wrapped by an `i32 main()`
//!   that converts its `double` result to an exit code.
//!
//! # Example
//!
//! ```
//! use inkwell::context::Context;
//! use krait::codegen::Codegen;
//! use krait::lexer::Lexer;
//! use krait::parser::Parser;
//!
//! let mut lexer = Lexer::new("pi = 3.14; get_pi () { return pi; }");
//! let mut parser = Parser::new(lexer.tokenize());
//! let program = parser.parse().unwrap();
//!
//! let context = Context::create();
//! let mut codegen = Codegen::new(&context, "example");
//! codegen.compile(&program).unwrap();
//!
//! let ir = codegen.print_ir();
//! assert!(ir.contains("define double @get_pi()"));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for code generation
//! - `values` - The scoped name table
//! - `expr` - Expression lowering
//! - `stmt` - Statement lowering
//! - `builtins` - Runtime helper declarations
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The AST types consumed by this module
//! * [LLVM Language Reference](https://llvm.org/docs/LangRef.html)

mod builtins;
mod error;
mod expr;
mod stmt;
mod values;


pub use builtins::RUNTIME_HELPERS;
pub use error::{CodegenError, CodegenErrorKind};

use crate::ast::{DefKind, Program, Stmt};
use crate::token::Span;
use inkwell::AddressSpace;
use inkwell::basic_block::BasicBlock;
use inkwell::context::Context;
use inkwell::module::Linkage;
use inkwell::types::BasicMetadataTypeEnum;
use inkwell::values::FunctionValue;
use values::NamedValues;

/// Priority given to the globals initializer in `llvm.global_ctors`.
/// 65535 is the lowest constructor priority, running after any
/// higher-priority constructors the host links in.
const GLOBAL_CTOR_PRIORITY: u64 = 65535;

/// LLVM code generator for krait programs.
///
/// `Codegen` holds the LLVM module and builder required for generating IR,
/// plus the scoped name table used for identifier resolution. It provides
/// [`compile`](Codegen::compile) to lower a whole [`Program`] and
/// [`print_ir`](Codegen::print_ir) to render the result.
///
/// # Lifetime
///
/// The `'ctx` lifetime parameter ties this struct to an LLVM [`Context`].
/// The context must outlive the code generator.
///
/// # Thread Safety
///
/// LLVM contexts are not thread-safe. Each thread should have its own
/// context and code generator.
pub struct Codegen<'ctx> {
    /// Reference to the LLVM context.
    context: &'ctx Context,
    /// The LLVM module being built.
    module: inkwell::module::Module<'ctx>,
    /// The IR builder for creating instructions.
    builder: inkwell::builder::Builder<'ctx>,
    /// The scoped name table, with the global scope at the bottom.
    values: NamedValues<'ctx>,
    /// The synthesized globals initializer and its entry block, present
    /// for the duration of one `compile` run.
    global_init: Option<(FunctionValue<'ctx>, BasicBlock<'ctx>)>,
}

impl<'ctx> Codegen<'ctx> {
    /// Creates a new code generator with the given LLVM context and module
    /// name.
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        let builder = context.create_builder();

        Codegen {
            context,
            module,
            builder,
            values: NamedValues::new(),
            global_init: None,
        }
    }

    /// Returns the module under construction.
    pub fn module(&self) -> &inkwell::module::Module<'ctx> {
        &self.module
    }

    /// Renders the module as textual LLVM IR.
    pub fn print_ir(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// Compiles a krait program into the module.
    ///
    /// Definitions are lowered in source order into a single walk: a
    /// variable definition creates its global (on first sight) and appends
    /// the initializer store to `global_var_init`; a function definition
    /// creates and fills in its function. The module bootstrap runs after
    /// the walk: the initializer's `ret void`, the constructor
    /// registration, and finally the runtime helper declarations for any
    /// helper not already present — so a user-defined `printf` or
    /// `println` claims the name first and wins.
    ///
    /// Because functions enter the module as their definitions are
    /// lowered, a call site can only resolve functions defined earlier in
    /// the file (runtime helpers excepted; those are declared on first
    /// use).
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] on the first failure: an unresolved
    /// identifier, an unknown function, an arity mismatch, a duplicate
    /// function name, a parameterized `main`, or a builder failure. The
    /// partially-built module must be discarded.
    pub fn compile(&mut self, program: &Program) -> Result<(), CodegenError> {
        self.values = NamedValues::new();
        self.begin_global_init();

        for definition in &program.definitions {
            match &definition.kind {
                DefKind::Function { name, params, body } => {
                    self.generate_function(name, params, body, definition.span)?;
                }
                DefKind::Variable { name, value } => {
                    self.generate_global(name, value, definition.span)?;
                }
            }
        }

        self.finish_global_init()?;
        self.declare_runtime_helpers();
        Ok(())
    }

    /// Creates the empty `global_var_init` function that accumulates
    /// top-level initializer stores.
    fn begin_global_init(&mut self) {
        let fn_type = self.context.void_type().fn_type(&[], false);
        let function = self
            .module
            .add_function("global_var_init", fn_type, Some(Linkage::Internal));
        let entry = self.context.append_basic_block(function, "entry");
        self.global_init = Some((function, entry));
    }

    /// Terminates `global_var_init` and registers it in the module's
    /// constructor array so the host runs it before `main`.
    fn finish_global_init(&mut self) -> Result<(), CodegenError> {
        let (function, entry) = self
            .global_init
            .take()
            .ok_or_else(|| CodegenError::llvm("constructor", "globals initializer missing", None))?;

        self.builder.position_at_end(entry);
        self.builder
            .build_return(None)
            .map_err(|e| CodegenError::llvm("return", &e.to_string(), None))?;

        let i32_type = self.context.i32_type();
        let ptr_type = self.context.ptr_type(AddressSpace::default());
        let ctor_type = self
            .context
            .struct_type(&[i32_type.into(), ptr_type.into(), ptr_type.into()], false);
        let ctor = ctor_type.const_named_struct(&[
            i32_type.const_int(GLOBAL_CTOR_PRIORITY, false).into(),
            function.as_global_value().as_pointer_value().into(),
            ptr_type.const_null().into(),
        ]);

        let ctors = self
            .module
            .add_global(ctor_type.array_type(1), None, "llvm.global_ctors");
        ctors.set_linkage(Linkage::Appending);
        ctors.set_initializer(&ctor_type.const_array(&[ctor]));

        Ok(())
    }

    /// Lowers a top-level variable definition.
    ///
    /// The first definition of a name creates its module global
    /// (`double`, external linkage, zero-initialized) and binds it in the
    /// global scope; later definitions of the same name re-use the global.
    /// Either way the initializer is lowered into `global_var_init` and
    /// stored, so the textually last store determines the effective initial
    /// value.
    fn generate_global(
        &mut self,
        name: &str,
        value: &crate::ast::Expr,
        span: Span,
    ) -> Result<(), CodegenError> {
        let (_, init_block) = self
            .global_init
            .ok_or_else(|| CodegenError::llvm("store", "globals initializer missing", Some(span)))?;

        let slot = match self.values.get(name) {
            Some(slot) => slot,
            None => {
                let f64_type = self.context.f64_type();
                let global = self.module.add_global(f64_type, None, name);
                global.set_linkage(Linkage::External);
                global.set_initializer(&f64_type.const_float(0.0));
                let slot = global.as_pointer_value();
                self.values.put(name, slot);
                slot
            }
        };

        self.builder.position_at_end(init_block);
        let value = self.generate_expr(value)?;
        self.builder
            .build_store(slot, value)
            .map_err(|e| CodegenError::llvm("store", &e.to_string(), Some(span)))?;

        Ok(())
    }

    /// Lowers a function definition.
    ///
    /// The function has type `double (double, ...)` with one `double`
    /// parameter per name. Each parameter gets a stack slot in the entry
    /// block, the incoming argument is stored into it, and the name is
    /// bound in a fresh scope which is popped afterwards. A body whose last
    /// block is not terminated receives an implicit `return 0.0`.
    ///
    /// A function named `main` is lowered as `main_` and wrapped (see
    /// [`generate_main_wrapper`](Self::generate_main_wrapper)).
    fn generate_function(
        &mut self,
        name: &str,
        params: &[String],
        body: &[Stmt],
        span: Span,
    ) -> Result<(), CodegenError> {
        let is_main = name == "main";
        if is_main && !params.is_empty() {
            return Err(CodegenError::main_with_parameters(span));
        }
        let llvm_name = if is_main { "main_" } else { name };

        // LLVM silently renames colliding symbols, which would leave the
        // earlier function shadowing this one with no diagnostic. Reject
        // the redefinition instead.
        if self.module.get_function(llvm_name).is_some() {
            return Err(CodegenError::duplicate_function(name, span));
        }

        let f64_type = self.context.f64_type();
        let param_types: Vec<BasicMetadataTypeEnum<'ctx>> =
            params.iter().map(|_| f64_type.into()).collect();
        let fn_type = f64_type.fn_type(&param_types, false);
        let function = self.module.add_function(llvm_name, fn_type, None);

        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        self.values.push();
        let body_result = self.generate_params_and_body(function, params, body, span);
        self.values.pop();
        body_result?;

        if is_main {
            self.generate_main_wrapper(function, span)?;
        }

        Ok(())
    }

    /// Binds the parameters into slots and lowers the body statements.
    ///
    /// Split out of [`generate_function`](Self::generate_function) so the
    /// scope pop runs on the error path too.
    fn generate_params_and_body(
        &mut self,
        function: FunctionValue<'ctx>,
        params: &[String],
        body: &[Stmt],
        span: Span,
    ) -> Result<(), CodegenError> {
        let f64_type = self.context.f64_type();

        for (idx, param_name) in params.iter().enumerate() {
            let param = function
                .get_nth_param(idx as u32)
                .ok_or_else(|| CodegenError::llvm("parameter", "parameter missing", Some(span)))?
                .into_float_value();
            param.set_name(param_name);

            let slot = self
                .builder
                .build_alloca(f64_type, param_name)
                .map_err(|e| CodegenError::llvm("alloca", &e.to_string(), Some(span)))?;
            self.builder
                .build_store(slot, param)
                .map_err(|e| CodegenError::llvm("store", &e.to_string(), Some(span)))?;
            // Duplicate parameter names: the later binding overwrites the
            // earlier one, so the last occurrence wins for reads.
            self.values.put(param_name, slot);
        }

        for stmt in body {
            if self.current_block_is_terminated() {
                // Statements after a return are still lowered, into a block
                // no edge reaches.
                let dead = self.context.append_basic_block(function, "dead");
                self.builder.position_at_end(dead);
            }
            self.generate_stmt(stmt)?;
        }

        if !self.current_block_is_terminated() {
            let zero = f64_type.const_float(0.0);
            self.builder
                .build_return(Some(&zero))
                .map_err(|e| CodegenError::llvm("return", &e.to_string(), Some(span)))?;
        }

        Ok(())
    }

    /// Emits the `i32 main()` wrapper around a lowered `main_`.
    ///
    /// The wrapper calls `main_`, converts its `double` result to `i32`
    /// with `fptosi`, and returns that as the process exit code.
    fn generate_main_wrapper(
        &mut self,
        main_fn: FunctionValue<'ctx>,
        span: Span,
    ) -> Result<(), CodegenError> {
        let i32_type = self.context.i32_type();
        let wrapper_type = i32_type.fn_type(&[], false);
        let wrapper = self.module.add_function("main", wrapper_type, None);

        let entry = self.context.append_basic_block(wrapper, "entry");
        self.builder.position_at_end(entry);

        let call = self
            .builder
            .build_call(main_fn, &[], "result")
            .map_err(|e| CodegenError::llvm("call", &e.to_string(), Some(span)))?;
        let result = call
            .try_as_basic_value()
            .basic()
            .ok_or_else(|| CodegenError::llvm("call", "'main_' produced no value", Some(span)))?
            .into_float_value();

        let exit_code = self
            .builder
            .build_float_to_signed_int(result, i32_type, "exit_code")
            .map_err(|e| CodegenError::llvm("fptosi", &e.to_string(), Some(span)))?;
        self.builder
            .build_return(Some(&exit_code))
            .map_err(|e| CodegenError::llvm("return", &e.to_string(), Some(span)))?;

        Ok(())
    }

    /// Returns `true` if the block the builder points at already has a
    /// terminator instruction.
    fn current_block_is_terminated(&self) -> bool {
        self.builder
            .get_insert_block()
            .and_then(|block| block.get_terminator())
            .is_some()
    }
}
