//! Binding forms and lambda construction.

use tracing::debug;

use super::{expect_count, expect_kind, expect_symbols};
use crate::errors::{binding_count_mismatch, invalid_variadic, no_arguments};
use crate::{Closure, Environment, EvalResult, Function, Value, ValueKind, VARIADIC_MARKER};

/// `def {names...} values...`: bind in the root environment.
pub(super) fn def(env: &Environment, args: Vec<Value>) -> EvalResult {
    bind("def", env, args, Scoping::Global)
}

/// `= {names...} values...`: bind in the calling environment.
pub(super) fn put(env: &Environment, args: Vec<Value>) -> EvalResult {
    bind("=", env, args, Scoping::Local)
}

#[derive(Copy, Clone, Debug)]
enum Scoping {
    Global,
    Local,
}

fn bind(func: &'static str, env: &Environment, args: Vec<Value>, scoping: Scoping) -> EvalResult {
    expect_kind(func, &args, 0, ValueKind::QExpr)?;
    let mut args = args.into_iter();
    let Some(names) = args.next() else {
        return Err(no_arguments(func));
    };
    let names = expect_symbols(func, names)?;
    let values: Vec<Value> = args.collect();

    if names.len() != values.len() {
        return Err(binding_count_mismatch(func, values.len(), names.len()));
    }

    for (name, value) in names.into_iter().zip(values) {
        debug!(func, name = name.as_str(), ?scoping, "bind");
        match scoping {
            Scoping::Global => env.define_global(name, value),
            Scoping::Local => env.define(name, value),
        }
    }
    Ok(Value::sexpr())
}

/// `\ {formals...} {body...}`: build a closure.
pub(super) fn lambda(_env: &Environment, args: Vec<Value>) -> EvalResult {
    expect_count("\\", &args, 2)?;
    expect_kind("\\", &args, 0, ValueKind::QExpr)?;
    expect_kind("\\", &args, 1, ValueKind::QExpr)?;

    let mut args = args.into_iter();
    let (Some(formals), Some(body)) = (args.next(), args.next()) else {
        return Err(no_arguments("\\"));
    };
    let formals = expect_symbols("\\", formals)?;

    // `&` may appear once, as the second-to-last formal.
    if let Some(index) = formals.iter().position(|f| f == VARIADIC_MARKER) {
        if index + 2 != formals.len() || formals[index + 1] == VARIADIC_MARKER {
            return Err(invalid_variadic());
        }
    }

    debug!(formals = formals.len(), "lambda");
    let body = body.into_cells().unwrap_or_default();
    Ok(Value::from(Function::Lambda(Box::new(Closure::new(formals, body)))))
}
