// scalargrad-core/src/ops/math_elem/tanh.rs

use crate::graph::Op;
use crate::value::Value;

/// Computes the hyperbolic tangent of a node. The result lies in `[-1, 1]`
/// for every non-NaN input.
///
/// Backward: `a += g * (1 - t^2)` where `t` is the forward result stored on
/// the output node.
pub fn tanh_op(a: &Value) -> Value {
    crate::ops::apply_unary_op(a, f64::tanh, Op::Tanh)
}

impl Value {
    /// Returns `tanh(self)` with gradient tracking.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
