//! The name table used during code generation.
//!
//! This module defines [`NamedValues`], a stack of lexical scopes mapping
//! names to the pointers backing them (stack slots for locals and
//! parameters, module globals for top-level variables).

use std::collections::HashMap;

use inkwell::values::PointerValue;

/// A stack of name → pointer scopes with lexical shadowing.
///
/// The table is created with one "global" scope at the bottom which is
/// never popped; function lowering pushes a scope on entry and pops it on
/// exit. Lookups walk the stack top-down, so an inner binding shadows an
/// outer one of the same name for the duration of its scope, and popping
/// restores the outer binding unchanged.
///
/// Because the language has exactly one value type, a binding is just the
/// `double` cell's pointer; loads and stores through it are typed at the
/// use site.
pub(super) struct NamedValues<'ctx> {
    /// The active scopes, innermost last.
    scopes: Vec<HashMap<String, PointerValue<'ctx>>>,
}

impl<'ctx> NamedValues<'ctx> {
    /// Creates a name table holding only the empty global scope.
    pub(super) fn new() -> Self {
        NamedValues {
            scopes: vec![HashMap::new()],
        }
    }

    /// Pushes a new empty scope onto the stack.
    pub(super) fn push(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Pops the top scope, discarding all its bindings.
    ///
    /// The global scope at the bottom is never removed.
    pub(super) fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Binds `name` in the top scope, overwriting any existing binding
    /// there. Bindings in outer scopes are untouched (shadowing, not
    /// replacement).
    pub(super) fn put(&mut self, name: &str, value: PointerValue<'ctx>) {
        // new() seeds the global scope and pop() never removes it
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Looks `name` up in the top-most scope that binds it.
    pub(super) fn get(&self, name: &str) -> Option<PointerValue<'ctx>> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }
}
