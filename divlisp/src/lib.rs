//! DivLisp Interpreter Library
//!
//! A small Lisp with numbers, symbols, S-Expressions and Q-Expressions.
//! Source text goes through [`lexer`] and [`parser`] into a generic
//! [`ast::ParseNode`] tree, which [`interp::read`] turns into values for
//! [`interp::eval`].

pub mod ast;
pub mod error;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod util;

pub use ast::Span;
pub use error::{CompileError, Result};
pub use interp::{Interpreter, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=divlisp=debug` or `RUST_LOG=divlisp=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
