//! Numeric folds.

use crate::errors::{division_by_zero, no_arguments, not_a_number};
use crate::{Environment, EvalError, EvalResult, Value};

pub(super) fn add(_env: &Environment, args: Vec<Value>) -> EvalResult {
    fold("+", &args, |x, y| Ok(x + y))
}

pub(super) fn sub(_env: &Environment, args: Vec<Value>) -> EvalResult {
    fold("-", &args, |x, y| Ok(x - y))
}

pub(super) fn mul(_env: &Environment, args: Vec<Value>) -> EvalResult {
    fold("*", &args, |x, y| Ok(x * y))
}

pub(super) fn div(_env: &Environment, args: Vec<Value>) -> EvalResult {
    fold("/", &args, |x, y| {
        if y == 0.0 {
            Err(division_by_zero())
        } else {
            Ok(x / y)
        }
    })
}

pub(super) fn pow(_env: &Environment, args: Vec<Value>) -> EvalResult {
    fold("^", &args, |x, y| Ok(x.powf(y)))
}

pub(super) fn min(_env: &Environment, args: Vec<Value>) -> EvalResult {
    fold("min", &args, |x, y| Ok(x.min(y)))
}

pub(super) fn max(_env: &Environment, args: Vec<Value>) -> EvalResult {
    fold("max", &args, |x, y| Ok(x.max(y)))
}

/// Left fold over all-number arguments, starting from the first.
///
/// A lone operand to `-` is negated.
fn fold(
    func: &'static str,
    args: &[Value],
    op: impl Fn(f64, f64) -> Result<f64, EvalError>,
) -> EvalResult {
    let numbers = args
        .iter()
        .map(|arg| arg.as_number().ok_or_else(|| not_a_number(arg.kind())))
        .collect::<Result<Vec<f64>, _>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(no_arguments(func));
    };

    if func == "-" && rest.is_empty() {
        return Ok(Value::Number(-first));
    }

    rest.iter()
        .try_fold(first, |acc, &n| op(acc, n))
        .map(Value::Number)
}
