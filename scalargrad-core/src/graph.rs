// scalargrad-core/src/graph.rs

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Stable index of a node inside its [`Graph`].
///
/// Parents always carry a smaller index than the nodes derived from them, so
/// index order is a valid topological order of the whole arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a node was produced.
///
/// The backward pass dispatches on this record to route a node's gradient to
/// its operands. Operands are kept per slot, so `Add(a, a)` contributes twice
/// to `a` even though `a` appears once in the node's parent set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow { base: NodeId, exponent: f64 },
    Exp(NodeId),
    Tanh(NodeId),
}

impl Op {
    /// Operand ids in slot order, duplicates included.
    pub fn operands(&self) -> impl Iterator<Item = NodeId> {
        let slots = match *self {
            Op::Leaf => [None, None],
            Op::Add(a, b) | Op::Mul(a, b) => [Some(a), Some(b)],
            Op::Pow { base, .. } => [Some(base), None],
            Op::Exp(a) | Op::Tanh(a) => [Some(a), None],
        };
        slots.into_iter().flatten()
    }

    /// Short diagnostic tag for the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow { .. } => "**",
            Op::Exp(_) => "exp",
            Op::Tanh(_) => "tanh",
        }
    }
}

/// A single scalar vertex of the computation graph.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Distinct operand ids, deduplicated by index. Empty for leaves.
    pub(crate) parents: Vec<NodeId>,
    pub(crate) label: String,
    /// Creation serial, never reused, used to detect handles to truncated nodes.
    pub(crate) stamp: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    pub(crate) nodes: Vec<Node>,
    created: u64,
}

/// Owner of every node built through it.
///
/// `Graph` is a cheap handle: clones share the same arena (`Rc<RefCell<_>>`),
/// which gives every [`Value`] interior mutability over its gradient while the
/// graph itself stays append-only.
#[derive(Clone, Default)]
pub struct Graph {
    arena: Rc<RefCell<Arena>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node (input, constant or parameter) with an empty label.
    pub fn leaf(&self, value: f64) -> Value {
        self.leaf_labeled(value, "")
    }

    /// Creates a labeled leaf node. The label is diagnostic only.
    pub fn leaf_labeled(&self, value: f64, label: impl Into<String>) -> Value {
        self.push(value, Op::Leaf, label.into())
    }

    /// Appends a node produced by a primitive operation.
    ///
    /// Only the operations in [`crate::ops`] call this, which keeps every
    /// derived node paired with a known local-gradient rule.
    pub(crate) fn push_derived(&self, value: f64, op: Op) -> Value {
        self.push(value, op, String::new())
    }

    fn push(&self, value: f64, op: Op, label: String) -> Value {
        let mut parents: Vec<NodeId> = Vec::with_capacity(2);
        for operand in op.operands() {
            if !parents.contains(&operand) {
                parents.push(operand);
            }
        }

        let mut arena = self.arena.borrow_mut();
        let id = NodeId(arena.nodes.len());
        debug_assert!(
            parents.iter().all(|p| *p < id),
            "operand created after its result"
        );
        let stamp = arena.created;
        arena.created += 1;
        arena.nodes.push(Node {
            value,
            grad: 0.0,
            op,
            parents,
            label,
            stamp,
        });
        drop(arena);

        Value::from_parts(self.clone(), id, stamp)
    }

    /// Number of nodes currently held by the arena.
    pub fn len(&self) -> usize {
        self.arena.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) {
        for node in self.arena.borrow_mut().nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Drops every node with an index of `len` or above.
    ///
    /// Typical use is to record `graph.len()` right after the parameters are
    /// built and truncate back to it after each training step, so per-step
    /// intermediates do not accumulate. Handles to dropped nodes must not be
    /// used afterwards; debug builds panic when they are.
    pub fn truncate(&self, len: usize) {
        let mut arena = self.arena.borrow_mut();
        let before = arena.nodes.len();
        arena.nodes.truncate(len);
        log::debug!("Graph truncated from {} to {} nodes", before, arena.nodes.len());
    }

    /// Whether `other` is a handle to the same arena.
    pub fn same_graph(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }

    pub(crate) fn arena(&self) -> Ref<'_, Arena> {
        self.arena.borrow()
    }

    pub(crate) fn arena_mut(&self) -> RefMut<'_, Arena> {
        self.arena.borrow_mut()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
