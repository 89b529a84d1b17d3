//! Stack growth for deeply nested programs.
//!
//! Both the parser and the evaluator recurse once per level of bracket
//! nesting, so an input such as `((((...))))` a few hundred thousand levels
//! deep would otherwise overflow the native stack. Every recursive entry point
//! wraps its body in [`ensure_sufficient_stack`], which switches to a freshly
//! allocated segment when the current one runs low.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
