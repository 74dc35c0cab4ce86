//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable primitive lives here. Each one is a plain function
//! (named `xxx_op`) that computes the forward value and appends a node whose
//! [`Op`] record tells the backward pass how to route gradient to the operands.
//!
//! - [`arithmetic`]: `add`, `mul`, `pow` and the derived `neg`, `sub`, `div`,
//!   plus the `std::ops` overloads for `Value`/`f64` combinations.
//! - [`math_elem`]: `exp` and `tanh`.
//!
//! Plain `f64` operands are promoted to fresh leaves of the other operand's
//! graph before delegating, so every constant shows up in the graph.

use crate::graph::{NodeId, Op};
use crate::value::Value;

/// Generates the operator overloads of a binary operation for every pairing
/// of `Value`, `&Value` and `f64`, all delegating to `$op_fn(&Value, &Value)`.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &crate::ops::promote(self, rhs))
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &crate::ops::promote(&self, rhs))
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&crate::ops::promote(rhs, self), rhs)
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&crate::ops::promote(&rhs, self), &rhs)
            }
        }
    };
}

pub mod arithmetic;
pub mod math_elem;

/// Turns a plain scalar into a leaf of `anchor`'s graph.
pub(crate) fn promote(anchor: &Value, scalar: f64) -> Value {
    anchor.graph().leaf(scalar)
}

/// Applies a unary scalar function and records the resulting node.
///
/// # Arguments
/// * `a`: The input node.
/// * `forward`: The forward function applied to `a`'s value.
/// * `record`: Builds the operation record from `a`'s id.
pub(crate) fn apply_unary_op<F, R>(a: &Value, forward: F, record: R) -> Value
where
    F: Fn(f64) -> f64,
    R: FnOnce(NodeId) -> Op,
{
    let out = forward(a.value());
    a.graph().push_derived(out, record(a.id()))
}

/// Applies a binary scalar function and records the resulting node.
///
/// # Panics
/// If `a` and `b` belong to different graphs. Operators cannot report errors,
/// so mixing graphs is treated as a programming error.
pub(crate) fn apply_binary_op<F, R>(
    a: &Value,
    b: &Value,
    forward: F,
    record: R,
    op_name: &str,
) -> Value
where
    F: Fn(f64, f64) -> f64,
    R: FnOnce(NodeId, NodeId) -> Op,
{
    assert!(
        a.graph().same_graph(b.graph()),
        "{op_name}: operands belong to different graphs"
    );
    let out = forward(a.value(), b.value());
    a.graph().push_derived(out, record(a.id(), b.id()))
}
