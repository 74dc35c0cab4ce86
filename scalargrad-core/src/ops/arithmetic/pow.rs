// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::graph::Op;
use crate::value::Value;
use num_traits::Pow;

/// Raises a node to a plain scalar power.
///
/// The exponent is a constant, not a node, so no gradient flows to it.
/// Backward: `base += g * n * base.value^(n - 1)`.
///
/// # Domain Considerations
/// A negative base with a non-integral exponent gives NaN in the forward value
/// and in the gradient. This is not guarded; NaN propagates like any other
/// IEEE-754 value. `pow_op(&x, -1.0)` with `x == 0` gives infinity.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    crate::ops::apply_unary_op(
        base,
        |x| x.powf(exponent),
        |id| Op::Pow { base: id, exponent },
    )
}

impl Value {
    /// Returns `self^exponent` with gradient tracking.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

impl Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

impl Pow<f64> for Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        pow_op(&self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
