//! Rendering values back to source-like text.

use std::fmt;

use lispy_stack::ensure_sufficient_stack;

use crate::{Function, Value};

/// How numbers are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NumberFormat {
    /// No fractional part: `2.5` prints as `2`.
    #[default]
    Integer,
    /// Two decimals: `2.5` prints as `2.50`.
    Fixed,
}

impl NumberFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "integer" => Some(NumberFormat::Integer),
            "fixed" => Some(NumberFormat::Fixed),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NumberFormat::Integer => "integer",
            NumberFormat::Fixed => "fixed",
        }
    }
}

/// A [`Value`] paired with a [`NumberFormat`], ready for `{}`.
pub struct DisplayValue<'a> {
    value: &'a Value,
    format: NumberFormat,
}

impl Value {
    pub fn display(&self, format: NumberFormat) -> DisplayValue<'_> {
        DisplayValue {
            value: self,
            format,
        }
    }
}

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value, self.format)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, NumberFormat::Integer)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, format: NumberFormat) -> fmt::Result {
    match value {
        Value::Number(n) => match format {
            NumberFormat::Integer => write!(f, "{n:.0}"),
            NumberFormat::Fixed => write!(f, "{n:.2}"),
        },
        Value::Symbol(name) => f.write_str(name),
        Value::Error(message) => write!(f, "Error: {message}"),
        Value::SExpr(cells) => write_cells(f, '(', cells, ')', format),
        Value::QExpr(cells) => write_cells(f, '{', cells, '}', format),
        Value::Function(Function::Builtin(_)) => f.write_str("<builtin>"),
        Value::Function(Function::Lambda(closure)) => {
            f.write_str("(\\ ")?;
            write_value(f, &closure.formals_value(), format)?;
            f.write_str(" ")?;
            write_cells(f, '{', &closure.body, '}', format)?;
            f.write_str(")")
        }
    }
}

fn write_cells(
    f: &mut fmt::Formatter<'_>,
    open: char,
    cells: &[Value],
    close: char,
    format: NumberFormat,
) -> fmt::Result {
    ensure_sufficient_stack(|| {
        write!(f, "{open}")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_value(f, cell, format)?;
        }
        write!(f, "{close}")
    })
}
