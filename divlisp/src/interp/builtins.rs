//! Native functions
//!
//! Every builtin receives its arguments already evaluated and owns them.
//! Preconditions are checked up front; a failed check returns a
//! [`RuntimeError`] which the caller turns into an `Error` value.

use super::env::Environment;
use super::error::{InterpResult, RuntimeError};
use super::eval::eval;
use super::value::{BuiltinFn, Value};

/// Names and implementations of every builtin, in registration order
pub const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("list", builtin_list),
    ("head", builtin_head),
    ("tail", builtin_tail),
    ("eval", builtin_eval),
    ("join", builtin_join),
    ("len", builtin_len),
    ("init", builtin_init),
    ("def", builtin_def),
    ("+", builtin_add),
    ("-", builtin_sub),
    ("*", builtin_mul),
    ("/", builtin_div),
    ("%", builtin_rem),
    ("^", builtin_pow),
];

/// Bind every builtin in `env`
pub fn register_builtins(env: &mut Environment) {
    for &(name, func) in BUILTINS {
        env.register_builtin(name, func);
    }
}

// ============================================================================
// Argument checks
// ============================================================================

fn expect_count(func: &str, args: &[Value], expected: usize) -> InterpResult<()> {
    if args.len() != expected {
        return Err(RuntimeError::arity_mismatch(func, args.len(), expected));
    }
    Ok(())
}

/// Take the children of a Q-Expression argument
fn qexpr_cells(func: &str, index: usize, arg: Value) -> InterpResult<Vec<Value>> {
    match arg {
        Value::QExpr(cells) => Ok(cells),
        other => Err(RuntimeError::type_error(
            func,
            index,
            other.type_name(),
            "Q-Expression",
        )),
    }
}

/// Check for exactly one Q-Expression argument and take its children
fn single_qexpr(func: &str, mut args: Vec<Value>) -> InterpResult<Vec<Value>> {
    expect_count(func, &args, 1)?;
    qexpr_cells(func, 0, args.swap_remove(0))
}

/// Like [`single_qexpr`], but the list must not be empty
fn non_empty_qexpr(func: &str, args: Vec<Value>) -> InterpResult<Vec<Value>> {
    let cells = single_qexpr(func, args)?;
    if cells.is_empty() {
        return Err(RuntimeError::empty_list(func));
    }
    Ok(cells)
}

// ============================================================================
// List builtins
// ============================================================================

fn builtin_list(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    Ok(Value::QExpr(args))
}

fn builtin_head(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    let mut cells = non_empty_qexpr("head", args)?;
    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

fn builtin_tail(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    let mut cells = non_empty_qexpr("tail", args)?;
    cells.remove(0);
    Ok(Value::QExpr(cells))
}

fn builtin_init(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    let mut cells = non_empty_qexpr("init", args)?;
    cells.pop();
    Ok(Value::QExpr(cells))
}

fn builtin_len(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    let cells = single_qexpr("len", args)?;
    Ok(Value::Number(cells.len() as f64))
}

fn builtin_eval(env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    let cells = single_qexpr("eval", args)?;
    Ok(eval(env, Value::SExpr(cells)))
}

fn builtin_join(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    if let Some((index, bad)) = args
        .iter()
        .enumerate()
        .find(|(_, arg)| !matches!(arg, Value::QExpr(_)))
    {
        return Err(RuntimeError::type_error(
            "join",
            index,
            bad.type_name(),
            "Q-Expression",
        ));
    }

    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(qexpr_cells("join", index, arg)?);
    }
    Ok(Value::QExpr(joined))
}

// ============================================================================
// Variables
// ============================================================================

fn builtin_def(env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(RuntimeError::arity_mismatch("def", 0, 1));
    };
    let symbols = qexpr_cells("def", 0, first)?;

    let mut names = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match symbol {
            Value::Symbol(name) => names.push(name),
            other => return Err(RuntimeError::cannot_define(other.type_name())),
        }
    }

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(RuntimeError::definition_count_mismatch(
            values.len(),
            names.len(),
        ));
    }

    for (name, value) in names.iter().zip(&values) {
        tracing::debug!(%name, %value, "def");
        env.put(name, value);
    }
    Ok(Value::SExpr(Vec::new()))
}

// ============================================================================
// Arithmetic
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    fn apply(self, x: f64, y: f64) -> InterpResult<f64> {
        Ok(match self {
            ArithOp::Add => x + y,
            ArithOp::Sub => x - y,
            ArithOp::Mul => x * y,
            ArithOp::Div => {
                if y == 0.0 {
                    return Err(RuntimeError::division_by_zero());
                }
                x / y
            }
            ArithOp::Rem => x % y,
            ArithOp::Pow => x.powf(y),
        })
    }
}

/// Left-to-right reduction shared by the arithmetic builtins
fn arithmetic(op: ArithOp, args: Vec<Value>) -> InterpResult<Value> {
    let func = op.symbol();
    let mut numbers = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg.as_number() {
            Some(n) => numbers.push(n),
            None => {
                return Err(RuntimeError::type_error(
                    func,
                    index,
                    arg.type_name(),
                    "Number",
                ));
            }
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(RuntimeError::arity_mismatch(func, 0, 1));
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return Ok(Value::Number(-first));
    }

    let mut acc = first;
    for &y in rest {
        acc = op.apply(acc, y)?;
    }
    Ok(Value::Number(acc))
}

fn builtin_add(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    arithmetic(ArithOp::Add, args)
}

fn builtin_sub(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    arithmetic(ArithOp::Sub, args)
}

fn builtin_mul(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    arithmetic(ArithOp::Mul, args)
}

fn builtin_div(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    arithmetic(ArithOp::Div, args)
}

fn builtin_rem(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    arithmetic(ArithOp::Rem, args)
}

fn builtin_pow(_env: &mut Environment, args: Vec<Value>) -> InterpResult<Value> {
    arithmetic(ArithOp::Pow, args)
}
