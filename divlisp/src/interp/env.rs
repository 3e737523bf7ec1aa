//! Environment for symbol bindings
//!
//! A single flat scope. Values are cloned on the way in and on the way
//! out, so the evaluator can consume whatever it gets back from a lookup
//! without touching the stored binding.

use super::error::RuntimeError;
use super::value::{BuiltinFn, NativeFn, Value};
use std::collections::HashMap;

/// Environment holding symbol bindings
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Look up a name, returning a copy of its value
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Look up a name; unbound names produce an `Error` value
    pub fn get(&self, name: &str) -> Value {
        tracing::trace!(name, "lookup");
        self.lookup(name)
            .unwrap_or_else(|| Value::Error(RuntimeError::unbound_symbol(name)))
    }

    /// Bind a copy of `value` to `name`, replacing any previous binding
    pub fn put(&mut self, name: &str, value: &Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value.clone();
        } else {
            self.bindings.insert(name.to_string(), value.clone());
        }
    }

    /// Bind a native function under `name`
    pub fn register_builtin(&mut self, name: &'static str, func: BuiltinFn) {
        self.put(name, &Value::Function(NativeFn::new(name, func)));
    }

    /// Check if a name is bound
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// All bound names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
