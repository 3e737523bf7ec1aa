//! Tree-walking interpreter
//!
//! Reader, evaluator, builtins and the environment they share.

mod builtins;
mod env;
mod error;
mod eval;
mod reader;
mod value;

pub use builtins::{BUILTINS, register_builtins};
pub use env::Environment;
pub use error::{ErrorKind, InterpResult, RuntimeError};
pub use eval::{Interpreter, eval};
pub use reader::read;
pub use value::{BuiltinFn, NativeFn, Value};
