// scalargrad-core/src/ops/arithmetic/add.rs

use crate::graph::Op;
use crate::value::Value;

/// Adds two nodes.
///
/// Backward: both operands receive the output gradient unchanged
/// (`a += g`, `b += g`). `add_op(&a, &a)` therefore gives `a` twice the
/// output gradient.
pub fn add_op(a: &Value, b: &Value) -> Value {
    crate::ops::apply_binary_op(a, b, |x, y| x + y, Op::Add, "add")
}

impl_binary_operator!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
