//! Runtime values for the interpreter
//!
//! Every list exclusively owns its children. There is no sharing between
//! values: the environment hands out clones, and evaluation consumes the
//! tree it is given.

use super::env::Environment;
use super::error::{InterpResult, RuntimeError};
use std::fmt;

/// Native function signature: receives the environment and the already
/// evaluated argument list, and owns that list from then on.
pub type BuiltinFn = fn(&mut Environment, Vec<Value>) -> InterpResult<Value>;

/// A builtin bound to a symbol
#[derive(Clone, Copy)]
pub struct NativeFn {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl NativeFn {
    pub fn new(name: &'static str, func: BuiltinFn) -> Self {
        NativeFn { name, func }
    }

    /// Invoke the builtin; a failed call becomes an `Error` value
    pub fn call(&self, env: &mut Environment, args: Vec<Value>) -> Value {
        tracing::debug!(builtin = self.name, argc = args.len(), "call");
        (self.func)(env, args).unwrap_or_else(Value::Error)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Double-precision number
    Number(f64),
    /// Error travelling back to the top level
    Error(RuntimeError),
    /// Name resolved through the environment
    Symbol(String),
    /// Expression awaiting evaluation
    SExpr(Vec<Value>),
    /// Quoted list, never evaluated implicitly
    QExpr(Vec<Value>),
    /// Builtin function
    Function(NativeFn),
}

impl Value {
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Get type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    /// Try to convert to f64
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<RuntimeError> for Value {
    fn from(err: RuntimeError) -> Self {
        Value::Error(err)
    }
}

/// Stack growth parameters for printing deeply nested lists
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROW_SIZE: usize = 1024 * 1024;

fn write_cells(
    f: &mut fmt::Formatter<'_>,
    open: char,
    cells: &[Value],
    close: char,
) -> fmt::Result {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
        write!(f, "{open}")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "{close}")
    })
}

/// Six fractional digits; NaN keeps its sign and prints in lower case
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        let sign = if n.is_sign_negative() { "-" } else { "" };
        write!(f, "{sign}nan")
    } else {
        write!(f, "{n:.6}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write_number(f, *n),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
            Value::Function(_) => write!(f, "<function>"),
        }
    }
}
