//! The builtin library.
//!
//! Every builtin receives the calling environment and its evaluated
//! arguments, checks its own contract with the validators below, and returns
//! an [`EvalError`] on the first violation.

mod arith;
mod binding;
mod list;

use tracing::debug;

use crate::errors::{empty_list, wrong_arg_count, wrong_arg_type};
use crate::{Builtin, Environment, EvalError, Function, Value, ValueKind};

const BUILTINS: &[Builtin] = &[
    // List
    Builtin::new("list", list::list),
    Builtin::new("head", list::head),
    Builtin::new("tail", list::tail),
    Builtin::new("eval", list::eval),
    Builtin::new("join", list::join),
    Builtin::new("cons", list::cons),
    // Binding
    Builtin::new("def", binding::def),
    Builtin::new("=", binding::put),
    Builtin::new("\\", binding::lambda),
    // Arithmetic
    Builtin::new("+", arith::add),
    Builtin::new("-", arith::sub),
    Builtin::new("*", arith::mul),
    Builtin::new("/", arith::div),
    Builtin::new("^", arith::pow),
    Builtin::new("min", arith::min),
    Builtin::new("max", arith::max),
];

/// Bind every builtin in `env`.
pub(crate) fn register(env: &Environment) {
    for builtin in BUILTINS {
        env.define(builtin.name(), Value::from(Function::Builtin(*builtin)));
    }
    debug!(count = BUILTINS.len(), "registered builtins");
}

// Validators

fn expect_count(func: &'static str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(func, args.len(), expected))
    }
}

fn expect_kind(
    func: &'static str,
    args: &[Value],
    index: usize,
    expected: ValueKind,
) -> Result<(), EvalError> {
    match args.get(index) {
        Some(arg) if arg.kind() == expected => Ok(()),
        Some(arg) => Err(wrong_arg_type(func, index, arg.kind(), expected)),
        None => Err(wrong_arg_count(func, args.len(), index + 1)),
    }
}

fn expect_non_empty(func: &'static str, args: &[Value], index: usize) -> Result<(), EvalError> {
    match args.get(index) {
        Some(arg) if arg.is_empty() => Err(empty_list(func)),
        _ => Ok(()),
    }
}

/// Names in a Q-expression of symbols.
fn expect_symbols(func: &'static str, list: Value) -> Result<Vec<String>, EvalError> {
    list.into_cells()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, mut cell)| match &mut cell {
            Value::Symbol(name) => Ok(std::mem::take(name)),
            other => Err(wrong_arg_type(func, index, other.kind(), ValueKind::Symbol)),
        })
        .collect()
}
