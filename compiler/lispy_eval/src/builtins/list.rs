//! List builtins over Q-expressions.

use super::{expect_count, expect_kind, expect_non_empty};
use crate::errors::no_arguments;
use crate::interpreter::evaluate;
use crate::{Environment, EvalResult, Value, ValueKind};

pub(super) fn list(_env: &Environment, args: Vec<Value>) -> EvalResult {
    Ok(Value::QExpr(args))
}

pub(super) fn head(_env: &Environment, args: Vec<Value>) -> EvalResult {
    let list = single_list("head", args)?;
    let mut cells = list.into_cells().unwrap_or_default();
    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

pub(super) fn tail(_env: &Environment, args: Vec<Value>) -> EvalResult {
    let mut list = single_list("tail", args)?;
    list.pop(0);
    Ok(list)
}

pub(super) fn eval(env: &Environment, args: Vec<Value>) -> EvalResult {
    expect_count("eval", &args, 1)?;
    expect_kind("eval", &args, 0, ValueKind::QExpr)?;
    let Some(expr) = args.into_iter().next() else {
        return Err(no_arguments("eval"));
    };
    Ok(evaluate(env, expr.into_sexpr()))
}

pub(super) fn join(_env: &Environment, args: Vec<Value>) -> EvalResult {
    if args.is_empty() {
        return Err(no_arguments("join"));
    }
    for index in 0..args.len() {
        expect_kind("join", &args, index, ValueKind::QExpr)?;
    }
    Ok(args.into_iter().fold(Value::qexpr(), Value::join))
}

pub(super) fn cons(_env: &Environment, args: Vec<Value>) -> EvalResult {
    expect_count("cons", &args, 2)?;
    expect_kind("cons", &args, 0, ValueKind::Number)?;
    expect_kind("cons", &args, 1, ValueKind::QExpr)?;
    let mut args = args.into_iter();
    let (Some(item), Some(list)) = (args.next(), args.next()) else {
        return Err(no_arguments("cons"));
    };
    let mut cells = list.into_cells().unwrap_or_default();
    cells.insert(0, item);
    Ok(Value::QExpr(cells))
}

/// The one non-empty Q-expression `head` and `tail` operate on.
fn single_list(func: &'static str, args: Vec<Value>) -> EvalResult {
    expect_count(func, &args, 1)?;
    expect_kind(func, &args, 0, ValueKind::QExpr)?;
    expect_non_empty(func, &args, 0)?;
    args.into_iter().next().ok_or_else(|| no_arguments(func))
}
