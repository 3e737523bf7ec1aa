//! Expression evaluator

use super::builtins::register_builtins;
use super::env::Environment;
use super::error::RuntimeError;
use super::reader::read;
use super::value::Value;
use crate::error::Result;
use crate::parser::parse_source;

/// Stack growth parameters for deeply nested input
const STACK_RED_ZONE: usize = 128 * 1024; // 128KB remaining triggers growth
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024; // Grow by 4MB each time

/// Evaluate a value, consuming it.
///
/// Symbols resolve through `env`, S-Expressions are reduced, and every
/// other variant (including quoted lists and errors) is returned as is.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || eval_inner(env, value))
}

fn eval_inner(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(cells) => eval_sexpr(env, cells),
        other => other,
    }
}

fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    // Every child is evaluated before any error is looked for.
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(index);
    }

    match cells.len() {
        0 => return Value::SExpr(cells),
        1 => return cells.swap_remove(0),
        _ => {}
    }

    let args = cells.split_off(1);
    match cells.pop() {
        Some(Value::Function(func)) => func.call(env, args),
        _ => Value::Error(RuntimeError::not_a_function()),
    }
}

/// The interpreter: an environment preloaded with the builtins
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Create a new interpreter with every builtin registered
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_builtins(&mut env);
        Interpreter { env }
    }

    /// Create an interpreter around an existing environment
    pub fn with_env(env: Environment) -> Self {
        Interpreter { env }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate a value against the interpreter's environment
    pub fn eval(&mut self, value: Value) -> Value {
        eval(&mut self.env, value)
    }

    /// Parse, read and evaluate one line of source.
    ///
    /// Only lexing and parsing can fail; evaluation errors come back as
    /// `Ok(Value::Error(..))`.
    pub fn eval_source(&mut self, source: &str) -> Result<Value> {
        let tree = parse_source(source)?;
        Ok(self.eval(read(&tree)))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
