//! Tree-walking evaluation.
//!
//! `evaluate` dispatches on the value: symbols are looked up, S-expressions
//! are reduced, and everything else evaluates to itself. Reduction evaluates
//! every cell left to right, lets the first error win, collapses empty and
//! singleton expressions, and otherwise applies the head to the rest.

mod apply;

pub use apply::apply;

use lispy_parse::SyntaxNode;
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::not_callable;
use crate::{builtins, read, read_program, Environment, Value};

/// Evaluate `value` in `env`, consuming it.
pub fn evaluate(env: &Environment, value: Value) -> Value {
    if let Value::Symbol(name) = &value {
        return env.lookup(name);
    }
    if matches!(value, Value::SExpr(_)) {
        let cells = value.into_cells().unwrap_or_default();
        return ensure_sufficient_stack(|| reduce(env, cells));
    }
    value
}

fn reduce(env: &Environment, cells: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| evaluate(env, cell)).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(index);
    }

    match cells.len() {
        0 => return Value::SExpr(cells),
        1 => return cells.swap_remove(0),
        _ => {}
    }

    let head = cells.remove(0);
    match &head {
        Value::Function(function) => {
            trace!(function = function.name(), args = cells.len(), "apply");
            apply(env, function.clone(), cells)
        }
        other => not_callable(other.kind()).into(),
    }
}

/// An evaluation context: a root environment with the builtin library bound.
///
/// Interpreters share nothing; bindings made in one are invisible to another.
pub struct Interpreter {
    root: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        let root = Environment::new();
        builtins::register(&root);
        Interpreter { root }
    }

    /// The root environment.
    pub fn env(&self) -> &Environment {
        &self.root
    }

    pub fn eval(&self, value: Value) -> Value {
        evaluate(&self.root, value)
    }

    /// Read a syntax tree and evaluate it as one expression.
    pub fn eval_node(&self, node: &SyntaxNode) -> Value {
        self.eval(read(node))
    }

    /// Evaluate each top-level expression of a program in order.
    pub fn eval_program(&self, node: &SyntaxNode) -> Vec<Value> {
        read_program(node)
            .into_iter()
            .map(|value| self.eval(value))
            .collect()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
