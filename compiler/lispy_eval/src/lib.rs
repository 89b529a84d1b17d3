//! Lispy Eval - the interpreter core.
//!
//! # Architecture
//!
//! ```text
//! SyntaxNode ──read──► Value ──evaluate(Environment)──► Value
//! ```
//!
//! - [`Value`]: every runtime datum, including errors and functions
//! - [`Environment`]: parent-linked binding tables for lexical lookup
//! - [`read`]: converts the parser's syntax tree into a [`Value`] tree
//! - [`evaluate`]: the tree-walking evaluator and function application
//! - builtins: the standard library, registered by [`Interpreter::new`]
//!
//! Errors are ordinary values. A builtin reports a violated contract as an
//! [`EvalError`], which the caller turns into [`Value::Error`]; from there it
//! short-circuits whichever S-expression contains it.

mod builtins;
mod environment;
pub mod errors;
mod function;
mod interpreter;
mod print;
mod reader;
mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalResult};
pub use function::{Builtin, BuiltinFn, Closure, Function, VARIADIC_MARKER};
pub use interpreter::{apply, evaluate, Interpreter};
pub use print::{DisplayValue, NumberFormat};
pub use reader::{read, read_program};
pub use value::{Value, ValueKind};
