//! Function values: native builtins and user-defined closures.

use std::fmt;

use crate::{Environment, EvalResult, Scope, Value};

/// Formal parameter that collects all remaining arguments into the next one.
pub const VARIADIC_MARKER: &str = "&";

/// Calling convention for native operations.
///
/// The builtin owns its argument list and either consumes it or drops it
/// before returning.
pub type BuiltinFn = fn(&Environment, Vec<Value>) -> EvalResult;

/// A callable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Lambda(Box<Closure>),
}

impl Function {
    /// Name used in traces: the builtin's registered name or `\`.
    pub fn name(&self) -> &str {
        match self {
            Function::Builtin(builtin) => builtin.name(),
            Function::Lambda(_) => "\\",
        }
    }
}

/// A native operation and the name it was registered under.
#[derive(Copy, Clone)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn call(&self, env: &Environment, args: Vec<Value>) -> EvalResult {
        (self.func)(env, args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A user-defined function.
///
/// `formals` holds the parameters still waiting for an argument; partial
/// application removes them from the front and binds the arguments into
/// `scope`. The scope has no parent while it lives inside a value; it is
/// linked to the calling environment only for the duration of a call.
#[derive(Clone, Debug, PartialEq)]
pub struct Closure {
    pub formals: Vec<String>,
    pub body: Vec<Value>,
    pub scope: Scope,
}

impl Closure {
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Closure::with_scope(formals, body, Scope::new())
    }

    pub fn with_scope(formals: Vec<String>, body: Vec<Value>, scope: Scope) -> Self {
        Closure {
            formals,
            body,
            scope,
        }
    }

    /// Formals as a Q-expression of symbols, as written in source.
    pub fn formals_value(&self) -> Value {
        Value::QExpr(self.formals.iter().cloned().map(Value::Symbol).collect())
    }
}
