// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts `b` from `a`, recorded as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl_binary_operator!(Sub, sub, sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
