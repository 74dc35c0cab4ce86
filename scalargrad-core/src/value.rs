// scalargrad-core/src/value.rs

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::graph::{Graph, Node, NodeId, Op};

/// Handle to a scalar node in a computation [`Graph`].
///
/// A `Value` is a `(graph, id)` pair: cloning it is cheap and every clone
/// refers to the same node. Equality and hashing follow node identity, not
/// the numeric value.
///
/// # Panics
///
/// Accessors index into the owning arena. Using a handle whose node was
/// dropped by [`Graph::truncate`] panics (or, in debug builds, is caught as a
/// stale handle even when the index was reused).
#[derive(Clone)]
pub struct Value {
    graph: Graph,
    id: NodeId,
    stamp: u64,
}

impl Value {
    pub(crate) fn from_parts(graph: Graph, id: NodeId, stamp: u64) -> Self {
        Value { graph, id, stamp }
    }

    /// Creates a leaf node in `graph`.
    pub fn new(graph: &Graph, value: f64) -> Self {
        graph.leaf(value)
    }

    /// Creates a labeled leaf node in `graph`.
    pub fn with_label(graph: &Graph, value: f64, label: impl Into<String>) -> Self {
        graph.leaf_labeled(value, label)
    }

    fn with_node<R>(&self, f: impl FnOnce(&Node) -> R) -> R {
        let arena = self.graph.arena();
        let node = &arena.nodes[self.id.0];
        debug_assert_eq!(node.stamp, self.stamp, "stale handle to a truncated node");
        f(node)
    }

    fn with_node_mut<R>(&self, f: impl FnOnce(&mut Node) -> R) -> R {
        let mut arena = self.graph.arena_mut();
        let node = &mut arena.nodes[self.id.0];
        debug_assert_eq!(node.stamp, self.stamp, "stale handle to a truncated node");
        f(node)
    }

    // --- Accessors ---

    /// The forward-computed value.
    pub fn value(&self) -> f64 {
        self.with_node(|n| n.value)
    }

    /// The gradient accumulated by the most recent backward pass.
    pub fn grad(&self) -> f64 {
        self.with_node(|n| n.grad)
    }

    pub fn label(&self) -> String {
        self.with_node(|n| n.label.clone())
    }

    /// The operation record that produced this node.
    pub fn op(&self) -> Op {
        self.with_node(|n| n.op)
    }

    /// Handles to the distinct direct inputs of this node.
    pub fn parents(&self) -> Vec<Value> {
        let arena = self.graph.arena();
        let node = &arena.nodes[self.id.0];
        debug_assert_eq!(node.stamp, self.stamp, "stale handle to a truncated node");
        node.parents
            .iter()
            .map(|&p| Value::from_parts(self.graph.clone(), p, arena.nodes[p.0].stamp))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Leaf
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    // --- Mutators ---

    /// Overwrites the forward value.
    ///
    /// Meant for leaves (parameter updates between training steps). Nodes
    /// already derived from this one keep the value they were computed with.
    pub fn set_value(&self, value: f64) {
        self.with_node_mut(|n| n.value = value);
    }

    pub fn set_grad(&self, grad: f64) {
        self.with_node_mut(|n| n.grad = grad);
    }

    /// Adds `delta` to the gradient.
    pub fn add_to_grad(&self, delta: f64) {
        self.with_node_mut(|n| n.grad += delta);
    }

    /// Resets the gradient to zero. Safe to call repeatedly.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.with_node_mut(|n| n.label = label);
    }

    // --- Backpropagation ---

    /// Computes the gradient of this node with respect to every ancestor.
    ///
    /// Seeds this node's gradient to `1.0` (overwriting it) and accumulates
    /// into the ancestors' gradients. Gradients left over from a previous pass
    /// are not cleared; call [`Value::zero_grad`] or [`Graph::zero_grad`] first.
    pub fn backward(&self) {
        // Rejects handles to truncated nodes before touching the arena.
        self.with_node(|_| ());
        crate::autograd::backward::run_backward(&self.graph, self.id);
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.graph.same_graph(&other.graph)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_node(|n| {
            let mut s = f.debug_struct("Value");
            s.field("id", &self.id.0)
                .field("value", &n.value)
                .field("grad", &n.grad);
            if !n.label.is_empty() {
                s.field("label", &n.label);
            }
            if n.op != Op::Leaf {
                s.field("op", &n.op.symbol());
            }
            s.finish()
        })
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
