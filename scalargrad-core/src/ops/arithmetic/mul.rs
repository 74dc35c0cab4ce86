// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::graph::Op;
use crate::value::Value;

/// Multiplies two nodes.
///
/// Backward (product rule): `a += g * b.value`, `b += g * a.value`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    crate::ops::apply_binary_op(a, b, |x, y| x * y, Op::Mul, "mul")
}

impl_binary_operator!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
