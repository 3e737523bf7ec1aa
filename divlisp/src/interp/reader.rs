//! Conversion of the generic parse tree into values
//!
//! Reading never fails out-of-band: a literal that does not fit in an
//! `f64` becomes an `Error` value in place of the number.

use super::error::RuntimeError;
use super::value::Value;
use crate::ast::ParseNode;

const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROW_SIZE: usize = 1024 * 1024;

/// Read a parse tree into a value tree
pub fn read(node: &ParseNode) -> Value {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || read_node(node))
}

fn read_node(node: &ParseNode) -> Value {
    if node.has_tag("number") {
        return read_number(&node.contents);
    }
    if node.has_tag("symbol") {
        return Value::symbol(node.contents.as_str());
    }

    let cells = || -> Vec<Value> {
        node.children
            .iter()
            .filter(|child| !child.is_punctuation())
            .map(read)
            .collect()
    };

    if node.has_tag("qexpr") {
        Value::QExpr(cells())
    } else if node.is_root() || node.has_tag("sexpr") {
        Value::SExpr(cells())
    } else {
        Value::Error(RuntimeError::unknown_node(&node.tag))
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::Error(RuntimeError::invalid_number()),
    }
}
