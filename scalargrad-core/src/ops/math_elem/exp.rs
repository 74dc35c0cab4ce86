// scalargrad-core/src/ops/math_elem/exp.rs

use crate::graph::Op;
use crate::value::Value;

/// Computes `e^a`.
///
/// Backward: `a += g * e^a`, reusing the forward result stored on the output
/// node. Large inputs overflow to infinity and propagate as such.
pub fn exp_op(a: &Value) -> Value {
    crate::ops::apply_unary_op(a, f64::exp, Op::Exp)
}

impl Value {
    /// Returns `exp(self)` with gradient tracking.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
