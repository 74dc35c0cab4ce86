use crate::graph::{Node, NodeId};
use crate::value::Value;

/// Builds a topological sort of the ancestors of `root`, `root` included.
///
/// Every node appears after all of its parents, and each node appears once
/// even when it is reachable through several paths. Reversed, this is the
/// order the backward pass visits nodes in.
pub fn build_topo(root: &Value) -> Vec<NodeId> {
    let arena = root.graph().arena();
    topological_order(&arena.nodes, root.id())
}

/// Depth-first post-order emission over `parents`, deduplicated by node id.
///
/// Runs on an explicit stack so long chains do not exhaust the call stack.
/// A node is marked visited when it is expanded; in an acyclic graph the only
/// visited-but-not-yet-emitted nodes are those on the current path, which
/// cannot be parents of the node being expanded.
pub(crate) fn topological_order(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted_list = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(id);
            continue;
        }
        if visited[id.0] {
            continue;
        }
        visited[id.0] = true;
        stack.push((id, true));

        // Reverse so the first parent is expanded first.
        for &parent in nodes[id.0].parents.iter().rev() {
            debug_assert!(parent < id, "cycle in computation graph at node {}", id.0);
            if !visited[parent.0] {
                stack.push((parent, false));
            }
        }
    }

    log::trace!("topological order from node {}: {} nodes", root.0, sorted_list.len());
    sorted_list
}
