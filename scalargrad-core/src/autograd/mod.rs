//! Reverse-mode traversal over the node arena.
//!
//! [`build_topo`] orders the ancestors of an output node; the backward pass
//! (`Value::backward`) walks that order in reverse and applies each node's
//! [`Op`](crate::graph::Op) rule. [`check_grad`] compares the resulting
//! gradients with finite differences.

pub(crate) mod backward;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::build_topo;
