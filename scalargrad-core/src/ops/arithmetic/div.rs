// scalargrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`, recorded as `a * b^-1`.
///
/// Dividing by a node whose value is exactly zero yields an infinite (or NaN)
/// forward value, and non-finite gradients in the backward pass. No error is
/// raised.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

impl_binary_operator!(Div, div, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
