//! Function application.

use std::collections::VecDeque;

use tracing::debug;

use crate::errors::{invalid_variadic, too_many_arguments};
use crate::interpreter::evaluate;
use crate::{Closure, Environment, Function, Value, VARIADIC_MARKER};

/// Apply `function` to already-evaluated `args` in the calling environment.
///
/// Builtins run directly. A closure binds one argument per formal into its
/// own scope; with arguments left over it is an error, with formals left over
/// the partially applied closure is returned, and when both run out together
/// the body runs with the closure's scope parented to `env`.
pub fn apply(env: &Environment, function: Function, args: Vec<Value>) -> Value {
    match function {
        Function::Builtin(builtin) => builtin.call(env, args).unwrap_or_else(Value::from),
        Function::Lambda(closure) => call_closure(env, *closure, args),
    }
}

fn call_closure(env: &Environment, closure: Closure, args: Vec<Value>) -> Value {
    let Closure {
        formals,
        body,
        mut scope,
    } = closure;
    let given = args.len();
    let total = formals.len();
    let mut formals = VecDeque::from(formals);
    let mut args = VecDeque::from(args);

    while let Some(arg) = args.pop_front() {
        let Some(formal) = formals.pop_front() else {
            return too_many_arguments(given, total).into();
        };

        if formal == VARIADIC_MARKER {
            if formals.len() != 1 {
                return invalid_variadic().into();
            }
            let Some(rest) = formals.pop_front() else {
                return invalid_variadic().into();
            };
            let mut collected = Vec::with_capacity(args.len() + 1);
            collected.push(arg);
            collected.extend(args.drain(..));
            scope.define(rest, Value::QExpr(collected));
            break;
        }

        scope.define(formal, arg);
    }

    // Only `& rest` left: the rest binds to an empty list.
    if formals.front().is_some_and(|formal| formal == VARIADIC_MARKER) {
        if formals.len() != 2 {
            return invalid_variadic().into();
        }
        formals.pop_front();
        if let Some(rest) = formals.pop_front() {
            scope.define(rest, Value::qexpr());
        }
    }

    if formals.is_empty() {
        debug!(bound = scope.len(), "call closure");
        scope.set_parent(Some(env.clone()));
        let local = Environment::from_scope(scope);
        return evaluate(&local, Value::SExpr(body));
    }

    debug!(remaining = formals.len(), "partial application");
    Value::from(Function::Lambda(Box::new(Closure::with_scope(
        formals.into(),
        body,
        scope,
    ))))
}
