use crate::autograd::graph::topological_order;
use crate::graph::{Graph, Node, NodeId, Op};

/// Runs one backward pass from `root`.
///
/// 1. Orders the ancestors of `root` topologically.
/// 2. Seeds `root`'s gradient to `1.0`, overwriting whatever it held.
/// 3. Applies each node's local-gradient rule in reverse order, so a node's
///    rule only runs once every node derived from it has contributed.
///
/// Nodes that are not ancestors of `root` are left untouched.
pub(crate) fn run_backward(graph: &Graph, root: NodeId) {
    let mut arena = graph.arena_mut();
    let nodes = &mut arena.nodes;

    let sorted_list = topological_order(nodes, root);
    log::debug!(
        "backward from node {}: {} of {} nodes reachable",
        root.0,
        sorted_list.len(),
        nodes.len()
    );

    nodes[root.0].grad = 1.0;
    for &id in sorted_list.iter().rev() {
        apply_local_gradient(nodes, id);
    }
}

/// Adds node `id`'s contribution to the gradients of its operands.
///
/// Contributions are always accumulated, never assigned: an operand may be
/// used by several nodes, or twice by the same node.
fn apply_local_gradient(nodes: &mut [Node], id: NodeId) {
    let out = &nodes[id.0];
    let grad_output = out.grad;
    let out_value = out.value;
    let op = out.op;

    match op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            nodes[a.0].grad += grad_output;
            nodes[b.0].grad += grad_output;
        }
        Op::Mul(a, b) => {
            let a_value = nodes[a.0].value;
            let b_value = nodes[b.0].value;
            nodes[a.0].grad += grad_output * b_value;
            nodes[b.0].grad += grad_output * a_value;
        }
        Op::Pow { base, exponent } => {
            let base_value = nodes[base.0].value;
            nodes[base.0].grad += grad_output * exponent * base_value.powf(exponent - 1.0);
        }
        Op::Exp(a) => {
            nodes[a.0].grad += grad_output * out_value;
        }
        Op::Tanh(a) => {
            nodes[a.0].grad += grad_output * (1.0 - out_value * out_value);
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
