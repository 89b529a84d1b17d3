//! Evaluation errors and their constructors.
//!
//! Builtins validate their arguments with these and return early with `?`.
//! At the application boundary an [`EvalError`] becomes a [`Value::Error`]
//! carrying the rendered message, which is all the language itself ever sees.
//!
//! # Usage
//!
//! ```ignore
//! use lispy_eval::errors::{wrong_arg_count, division_by_zero};
//! ```

use thiserror::Error;

use crate::{Value, ValueKind};

/// Result of a builtin or of closure application.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    // Lookup
    #[error("Unbound symbol '{name}'")]
    UnboundSymbol { name: String },

    // Application
    #[error("S-Expression starts with incorrect type. Got {got}, Expected Function.")]
    NotCallable { got: ValueKind },

    #[error("Function passed too many arguments. Got {given}, Expected {expected}.")]
    TooManyArguments { given: usize, expected: usize },

    #[error("Function format invalid. Symbol '&' not followed by single symbol.")]
    InvalidVariadic,

    // Builtin argument contracts
    #[error("Function '{func}' passed incorrect number of arguments. Got {got}, Expected {expected}.")]
    WrongArgCount {
        func: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("Function '{func}' passed incorrect type for argument {index}. Got {got}, Expected {expected}.")]
    WrongArgType {
        func: &'static str,
        index: usize,
        got: ValueKind,
        expected: ValueKind,
    },

    #[error("Function '{func}' passed {{}}!")]
    EmptyList { func: &'static str },

    #[error("Function '{func}' passed no arguments.")]
    NoArguments { func: &'static str },

    #[error("Function '{func}' cannot bind {values} value(s) to {symbols} symbol(s).")]
    BindingCountMismatch {
        func: &'static str,
        values: usize,
        symbols: usize,
    },

    #[error("Cannot operate on a non-number. Got {got}, Expected Number.")]
    NotANumber { got: ValueKind },

    // Domain
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid number")]
    InvalidNumber,

    // Reader
    #[error("Cannot read a {tag} node as a value")]
    UnreadableNode { tag: &'static str },
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err.to_string())
    }
}

// Lookup Errors

pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_string(),
    }
}

// Application Errors

pub fn not_callable(got: ValueKind) -> EvalError {
    EvalError::NotCallable { got }
}

pub fn too_many_arguments(given: usize, expected: usize) -> EvalError {
    EvalError::TooManyArguments { given, expected }
}

pub fn invalid_variadic() -> EvalError {
    EvalError::InvalidVariadic
}

// Builtin Contract Errors

pub fn wrong_arg_count(func: &'static str, got: usize, expected: usize) -> EvalError {
    EvalError::WrongArgCount {
        func,
        got,
        expected,
    }
}

pub fn wrong_arg_type(
    func: &'static str,
    index: usize,
    got: ValueKind,
    expected: ValueKind,
) -> EvalError {
    EvalError::WrongArgType {
        func,
        index,
        got,
        expected,
    }
}

pub fn empty_list(func: &'static str) -> EvalError {
    EvalError::EmptyList { func }
}

pub fn no_arguments(func: &'static str) -> EvalError {
    EvalError::NoArguments { func }
}

pub fn binding_count_mismatch(func: &'static str, values: usize, symbols: usize) -> EvalError {
    EvalError::BindingCountMismatch {
        func,
        values,
        symbols,
    }
}

pub fn not_a_number(got: ValueKind) -> EvalError {
    EvalError::NotANumber { got }
}

// Domain Errors

pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

pub fn invalid_number() -> EvalError {
    EvalError::InvalidNumber
}

pub fn unreadable_node(tag: &'static str) -> EvalError {
    EvalError::UnreadableNode { tag }
}
