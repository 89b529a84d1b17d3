//! Runtime values.
//!
//! A [`Value`] exclusively owns everything beneath it: list cells, symbol
//! names, error messages and, for closures, the captured bindings. Methods
//! that take `self` consume the value; `Clone` is a full deep copy.
//!
//! Cloning, comparison and dropping are written by hand so that nesting depth
//! is bounded by memory rather than by the native stack. `Value` implements
//! `Drop`, so payloads are moved out with `mem::take` instead of by pattern.

use std::fmt;
use std::mem;

use lispy_stack::ensure_sufficient_stack;

use crate::Function;

/// Every runtime datum.
#[derive(Debug)]
pub enum Value {
    Number(f64),
    Symbol(String),
    /// Terminal for the expression containing it.
    Error(String),
    /// An expression to be reduced.
    SExpr(Vec<Value>),
    /// Quoted data; never reduced automatically.
    QExpr(Vec<Value>),
    Function(Function),
}

/// Variant of a [`Value`], used in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Symbol,
    Error,
    SExpr,
    QExpr,
    Function,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::Symbol => "Symbol",
            ValueKind::Error => "Error",
            ValueKind::SExpr => "S-Expression",
            ValueKind::QExpr => "Q-Expression",
            ValueKind::Function => "Function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Error(_) => ValueKind::Error,
            Value::SExpr(_) => ValueKind::SExpr,
            Value::QExpr(_) => ValueKind::QExpr,
            Value::Function(_) => ValueKind::Function,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The cells of an S- or Q-expression.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Consume a list, keeping only its cells.
    pub fn into_cells(mut self) -> Option<Vec<Value>> {
        match &mut self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(mem::take(cells)),
            _ => None,
        }
    }

    /// Number of cells; zero for anything that is not a list.
    pub fn len(&self) -> usize {
        self.cells().map_or(0, <[Value]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `cell` to a list. Non-list values are returned unchanged.
    #[must_use]
    pub fn add(mut self, cell: Value) -> Value {
        if let Value::SExpr(cells) | Value::QExpr(cells) = &mut self {
            cells.push(cell);
        }
        self
    }

    /// Remove and return the cell at `index`, shifting the rest down.
    ///
    /// Returns `None` for non-lists and out-of-range indices.
    pub fn pop(&mut self, index: usize) -> Option<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) if index < cells.len() => {
                Some(cells.remove(index))
            }
            _ => None,
        }
    }

    /// Extract the cell at `index` and discard the rest of the list.
    pub fn take(mut self, index: usize) -> Option<Value> {
        self.pop(index)
    }

    /// Append every cell of `other` onto `self`, consuming both.
    ///
    /// The result keeps `self`'s label. If either side is not a list, `self`
    /// is returned unchanged.
    #[must_use]
    pub fn join(mut self, other: Value) -> Value {
        if let (Value::SExpr(cells) | Value::QExpr(cells), Some(extra)) =
            (&mut self, other.into_cells())
        {
            cells.extend(extra);
        }
        self
    }

    /// Relabel a list as an S-expression.
    #[must_use]
    pub fn into_sexpr(mut self) -> Value {
        if let Value::QExpr(cells) = &mut self {
            return Value::SExpr(mem::take(cells));
        }
        self
    }

    /// Cells owned directly by this value, including a closure's body.
    fn owned_cells(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            Value::Function(Function::Lambda(closure)) => Some(&mut closure.body),
            _ => None,
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Symbol(name) => Value::Symbol(name.clone()),
            Value::Error(message) => Value::Error(message.clone()),
            Value::SExpr(cells) => ensure_sufficient_stack(|| Value::SExpr(cells.clone())),
            Value::QExpr(cells) => ensure_sufficient_stack(|| Value::QExpr(cells.clone())),
            Value::Function(function) => {
                ensure_sufficient_stack(|| Value::Function(function.clone()))
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => {
                ensure_sufficient_stack(|| a == b)
            }
            (Value::Function(a), Value::Function(b)) => ensure_sufficient_stack(|| a == b),
            _ => false,
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let Some(cells) = self.owned_cells() else {
            return;
        };
        if cells.is_empty() {
            return;
        }
        let mut pending = mem::take(cells);
        while let Some(mut value) = pending.pop() {
            if let Some(cells) = value.owned_cells() {
                pending.append(cells);
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

#[cfg(test)]
mod tests;
