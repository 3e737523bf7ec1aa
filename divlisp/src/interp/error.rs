//! Runtime errors for the interpreter
//!
//! A runtime error is an ordinary value: it is carried by
//! [`Value::Error`](super::Value::Error), returned from `eval` like any
//! other result and printed as `Error: <message>`.

use std::fmt;

/// Runtime error produced while reading or evaluating
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed literal or unrecognised parse node
    Parse,
    /// Lookup of an undefined name
    UnboundSymbol,
    /// Argument of the wrong variant
    TypeError,
    /// Wrong argument count
    ArityMismatch,
    /// Division by zero, empty list, non-function head, `def` count mismatch
    Domain,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_number() -> Self {
        Self::new(ErrorKind::Parse, "Invalid Number!!")
    }

    pub fn unknown_node(tag: &str) -> Self {
        Self::new(ErrorKind::Parse, format!("Unknown parse node '{tag}'"))
    }

    pub fn unbound_symbol(name: &str) -> Self {
        Self::new(ErrorKind::UnboundSymbol, format!("Unbound Symbol '{name}'"))
    }

    /// The name an unbound-symbol error complains about
    pub fn unbound_name(&self) -> Option<&str> {
        if self.kind != ErrorKind::UnboundSymbol {
            return None;
        }
        self.message
            .strip_prefix("Unbound Symbol '")
            .and_then(|rest| rest.strip_suffix('\''))
    }

    pub fn not_a_function() -> Self {
        Self::new(ErrorKind::Domain, "First element is not a function!!")
    }

    pub fn arity_mismatch(func: &str, got: usize, expected: usize) -> Self {
        Self::new(
            ErrorKind::ArityMismatch,
            format!(
                "Function '{func}' passed incorrect number of arguments. Got {got}, Expected {expected}."
            ),
        )
    }

    pub fn type_error(func: &str, index: usize, got: &str, expected: &str) -> Self {
        Self::new(
            ErrorKind::TypeError,
            format!(
                "Function '{func}' passed incorrect type for argument {index}. Got {got}, Expected {expected}."
            ),
        )
    }

    pub fn empty_list(func: &str) -> Self {
        Self::new(ErrorKind::Domain, format!("Function '{func}' passed {{}}!"))
    }

    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::Domain, "Division By Zero!")
    }

    pub fn cannot_define(got: &str) -> Self {
        Self::new(
            ErrorKind::TypeError,
            format!("Function 'def' cannot define non-symbol. Got {got}, Expected Symbol."),
        )
    }

    pub fn definition_count_mismatch(got: usize, expected: usize) -> Self {
        Self::new(
            ErrorKind::Domain,
            format!(
                "Function 'def' passed too many arguments for symbols. Got {got}, Expected {expected}."
            ),
        )
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}

/// Result type for builtin implementations
pub type InterpResult<T> = Result<T, RuntimeError>;
