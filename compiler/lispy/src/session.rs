//! One interpreter plus the settings used to show its results.

use std::io::{self, Write};
use std::path::Path;

use lispy_eval::{Interpreter, NumberFormat, Value};
use lispy_parse::{parse, ParseError};
use thiserror::Error;
use tracing::debug;

use crate::diagnostics::emit_parse_error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Write(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A long-lived evaluation context.
///
/// Bindings persist across lines and files evaluated in the same session.
#[derive(Default)]
pub struct Session {
    interp: Interpreter,
    format: NumberFormat,
}

impl Session {
    pub fn new(format: NumberFormat) -> Self {
        Session {
            interp: Interpreter::new(),
            format,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }

    /// Evaluate a line as a single expression.
    ///
    /// `+ 1 2` and `(+ 1 2)` are equivalent here.
    pub fn eval_line(&self, line: &str) -> Result<Value, ParseError> {
        let tree = parse(line)?;
        Ok(self.interp.eval_node(&tree))
    }

    /// Evaluate each top-level expression of `source` in order.
    pub fn eval_source(&self, source: &str) -> Result<Vec<Value>, ParseError> {
        let tree = parse(source)?;
        Ok(self.interp.eval_program(&tree))
    }

    pub fn render(&self, value: &Value) -> String {
        value.display(self.format).to_string()
    }

    /// Evaluate `source` and write each result other than `()` to `out`.
    pub fn run_source(&self, source: &str, out: &mut impl Write) -> Result<(), SessionError> {
        for value in self.eval_source(source)? {
            if value == Value::sexpr() {
                continue;
            }
            writeln!(out, "{}", value.display(self.format))?;
        }
        Ok(())
    }

    /// Read and run a file.
    ///
    /// A parse error is reported against the file's text before it is
    /// returned.
    pub fn run_file(&self, path: &Path, out: &mut impl Write) -> Result<(), SessionError> {
        debug!(path = %path.display(), "run file");
        let source = std::fs::read_to_string(path).map_err(|source| SessionError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let result = self.run_source(&source, out);
        if let Err(SessionError::Parse(err)) = &result {
            emit_parse_error(&source, err);
        }
        result
    }

    /// Root bindings, rendered, for listing.
    pub fn bindings(&self) -> Vec<(String, String)> {
        self.interp
            .env()
            .bindings()
            .into_iter()
            .map(|(name, value)| (name, self.render(&value)))
            .collect()
    }
}
