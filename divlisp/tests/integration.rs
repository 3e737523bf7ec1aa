//! Integration tests for the DivLisp interpreter
//!
//! Drives the whole pipeline: tokenize, parse, read, eval, print.

use divlisp::interp::{ErrorKind, RuntimeError, Value, read};
use divlisp::lexer::tokenize;
use divlisp::parser::parse;
use divlisp::{CompileError, Interpreter};
use insta::assert_snapshot;

/// Evaluate each line in one interpreter and return the printed results
fn session(lines: &[&str]) -> Vec<String> {
    let mut interp = Interpreter::new();
    lines
        .iter()
        .map(|line| interp.eval_source(line).unwrap().to_string())
        .collect()
}

/// Evaluate a single line in a fresh interpreter and print the result
fn eval_str(source: &str) -> String {
    session(&[source]).remove(0)
}

fn eval_value(source: &str) -> Value {
    Interpreter::new().eval_source(source).unwrap()
}

// ============================================
// Reader and literals
// ============================================

#[test]
fn test_number_literals_round_trip() {
    for n in [0.0, 1.0, -1.0, 42.0, 123456789.0, -99999.0] {
        let source = format!("{n}");
        assert_eq!(eval_value(&source), Value::Number(n), "literal {source}");
    }
}

#[test]
fn test_pipeline_by_hand() {
    let source = "(+ 1 2)";
    let tokens = tokenize(source).unwrap();
    let tree = parse(source, tokens).unwrap();
    let value = read(&tree);
    assert_eq!(value.to_string(), "((+ 1.000000 2.000000))");

    let mut interp = Interpreter::new();
    assert_eq!(interp.eval(value), Value::Number(3.0));
}

#[test]
fn test_out_of_range_literal() {
    let literal = "1".repeat(400);
    assert_snapshot!(eval_str(&literal), @"Error: Invalid Number!!");
}

// ============================================
// Evaluation rules
// ============================================

#[test]
fn test_empty_expression() {
    assert_snapshot!(eval_str("()"), @"()");
    assert_snapshot!(eval_str("{}"), @"{}");
}

#[test]
fn test_arithmetic() {
    assert_snapshot!(eval_str("(+ 1 2 3)"), @"6.000000");
    assert_snapshot!(eval_str("(- 5)"), @"-5.000000");
    assert_snapshot!(eval_str("- 10 4 3"), @"3.000000");
    assert_snapshot!(eval_str("* 2 (+ 3 4)"), @"14.000000");
    assert_snapshot!(eval_str("/ 10 4"), @"2.500000");
    assert_snapshot!(eval_str("% 10 3"), @"1.000000");
    assert_snapshot!(eval_str("^ 2 10"), @"1024.000000");
}

#[test]
fn test_division_by_zero() {
    assert_snapshot!(eval_str("(/ 1 0)"), @"Error: Division By Zero!");
}

#[test]
fn test_remainder_by_zero_prints_nan() {
    let printed = eval_str("% 1 0");
    assert!(printed == "nan" || printed == "-nan", "got {printed}");
}

#[test]
fn test_number_runs_into_symbol() {
    assert_snapshot!(eval_str("list 12-3"), @"{12.000000 -3.000000}");
    assert_snapshot!(eval_str("+ 1-1"), @"0.000000");
}

#[test]
fn test_arithmetic_on_non_number() {
    assert_snapshot!(
        eval_str("+ 1 {2}"),
        @"Error: Function '+' passed incorrect type for argument 1. Got Q-Expression, Expected Number."
    );
}

#[test]
fn test_list_builtins() {
    assert_snapshot!(eval_str("(list 1 2 3)"), @"{1.000000 2.000000 3.000000}");
    assert_snapshot!(eval_str("(head {1 2 3})"), @"{1.000000}");
    assert_snapshot!(eval_str("(tail {1 2 3})"), @"{2.000000 3.000000}");
    assert_snapshot!(eval_str("(init {1 2 3})"), @"{1.000000 2.000000}");
    assert_snapshot!(eval_str("(len {1 2 3})"), @"3.000000");
    assert_snapshot!(eval_str("(join {1 2} {3})"), @"{1.000000 2.000000 3.000000}");
}

#[test]
fn test_quoted_code_is_data() {
    assert_snapshot!(eval_str("{+ 1 (* 2 x)}"), @"{+ 1.000000 (* 2.000000 x)}");
    assert_snapshot!(eval_str("eval {+ 1 (* 2 3)}"), @"7.000000");
    assert_snapshot!(eval_str("eval (head {(+ 1 2) (+ 10 20)})"), @"3.000000");
}

#[test]
fn test_eval_of_list_of_numbers_is_not_a_function() {
    assert_snapshot!(
        eval_str("(eval (list 1 2 3))"),
        @"Error: First element is not a function!!"
    );
    assert_eq!(eval_str("(eval (list 1 2 3))"), eval_str("(1 2 3)"));
}

#[test]
fn test_builtin_errors() {
    assert_snapshot!(eval_str("head {}"), @"Error: Function 'head' passed {}!");
    assert_snapshot!(
        eval_str("tail {1} {2}"),
        @"Error: Function 'tail' passed incorrect number of arguments. Got 2, Expected 1."
    );
    assert_snapshot!(
        eval_str("len 5"),
        @"Error: Function 'len' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
    assert_snapshot!(
        eval_str("join {1} head"),
        @"Error: Function 'join' passed incorrect type for argument 1. Got Function, Expected Q-Expression."
    );
}

#[test]
fn test_functions_print_opaquely() {
    assert_snapshot!(eval_str("+"), @"<function>");
    assert_snapshot!(eval_str("list head tail"), @"{<function> <function>}");
}

// ============================================
// Environment and def
// ============================================

#[test]
fn test_def_and_lookup() {
    let out = session(&["def {x} 5", "x", "def {x} 6", "x"]);
    assert_eq!(out, vec!["()", "5.000000", "()", "6.000000"]);
}

#[test]
fn test_def_multiple_and_use() {
    let out = session(&["def {a b} 3 4", "+ a b", "def {xs} {1 2 3}", "len xs", "xs"]);
    assert_eq!(
        out,
        vec!["()", "7.000000", "()", "3.000000", "{1.000000 2.000000 3.000000}"]
    );
}

#[test]
fn test_def_through_quoted_symbol_list() {
    let out = session(&["def {names} {p q}", "def names 1 2", "list p q"]);
    assert_eq!(out[2], "{1.000000 2.000000}");
}

#[test]
fn test_lookup_returns_independent_copy() {
    let out = session(&["def {xs} {1 2 3}", "tail xs", "xs"]);
    assert_eq!(out[2], "{1.000000 2.000000 3.000000}");
}

#[test]
fn test_builtins_can_be_aliased_and_shadowed() {
    let out = session(&["def {first} head", "first {7 8}", "def {head} 1", "head"]);
    assert_eq!(out, vec!["()", "{7.000000}", "()", "1.000000"]);
}

#[test]
fn test_def_errors() {
    assert_snapshot!(
        eval_str("def {x y} 1"),
        @"Error: Function 'def' passed too many arguments for symbols. Got 1, Expected 2."
    );
    assert_snapshot!(
        eval_str("def {1} 1"),
        @"Error: Function 'def' cannot define non-symbol. Got Number, Expected Symbol."
    );
    assert_snapshot!(
        eval_str("def 1 1"),
        @"Error: Function 'def' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
}

#[test]
fn test_unbound_symbol() {
    assert_snapshot!(eval_str("y"), @"Error: Unbound Symbol 'y'");
    match eval_value("y") {
        Value::Error(err) => assert_eq!(err.kind, ErrorKind::UnboundSymbol),
        other => panic!("expected error, got {other}"),
    }
}

// ============================================
// Error propagation
// ============================================

#[test]
fn test_first_error_short_circuits() {
    assert_eq!(
        eval_value("(+ 1 (/ 1 0) (head {}))"),
        Value::Error(RuntimeError::division_by_zero())
    );
    assert_eq!(
        eval_value("(+ 1 (head {}) (/ 1 0))"),
        Value::Error(RuntimeError::empty_list("head"))
    );
}

#[test]
fn test_errors_pass_through_builtins_unchanged() {
    assert_snapshot!(eval_str("list 1 (undefined) 3"), @"Error: Unbound Symbol 'undefined'");
    assert_snapshot!(eval_str("eval {head (tail {1})}"), @"Error: Function 'head' passed {}!");
}

#[test]
fn test_interpreter_usable_after_error() {
    let out = session(&["/ 1 0", "def {x} 2", "nope", "* x 21"]);
    assert_eq!(
        out,
        vec![
            "Error: Division By Zero!",
            "()",
            "Error: Unbound Symbol 'nope'",
            "42.000000",
        ]
    );
}

// ============================================
// Front-end failures
// ============================================

#[test]
fn test_syntax_errors_never_reach_the_evaluator() {
    let mut interp = Interpreter::new();
    assert!(matches!(
        interp.eval_source("(+ 1 2"),
        Err(CompileError::Parser { .. })
    ));
    assert!(matches!(
        interp.eval_source("+ 1 @"),
        Err(CompileError::Lexer { .. })
    ));
}
