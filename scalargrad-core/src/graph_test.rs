use super::*;

#[test]
fn test_leaf_construction() {
    let graph = Graph::new();
    assert!(graph.is_empty());

    let v = graph.leaf(3.25);
    assert_eq!(v.value(), 3.25);
    assert_eq!(v.grad(), 0.0);
    assert_eq!(v.label(), "");
    assert_eq!(v.op(), Op::Leaf);
    assert!(v.parents().is_empty());
    assert_eq!(graph.len(), 1);

    let labeled = graph.leaf_labeled(2.5, "euler");
    assert_eq!(labeled.label(), "euler");
    assert_eq!(labeled.id().index(), 1);
}

#[test]
fn test_leaf_accepts_non_finite() {
    let graph = Graph::new();
    assert!(graph.leaf(f64::NAN).value().is_nan());
    assert_eq!(graph.leaf(f64::INFINITY).value(), f64::INFINITY);
    assert_eq!(graph.leaf(f64::NEG_INFINITY).value(), f64::NEG_INFINITY);
}

#[test]
fn test_parents_are_deduplicated() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let doubled = &a + &a;
    assert_eq!(doubled.op(), Op::Add(a.id(), a.id()));
    assert_eq!(doubled.parents(), vec![a.clone()]);

    let b = graph.leaf(3.0);
    let product = &a * &b;
    assert_eq!(product.parents(), vec![a, b]);
}

#[test]
fn test_op_operands_keep_duplicates() {
    let a = NodeId(0);
    let b = NodeId(1);
    assert_eq!(Op::Add(a, a).operands().collect::<Vec<_>>(), vec![a, a]);
    assert_eq!(Op::Mul(a, b).operands().collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(
        Op::Pow { base: b, exponent: 2.0 }.operands().collect::<Vec<_>>(),
        vec![b]
    );
    assert_eq!(Op::Leaf.operands().count(), 0);
    assert_eq!(Op::Tanh(a).symbol(), "tanh");
}

#[test]
fn test_graph_zero_grad_resets_every_node() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let c = &a * &b;
    c.backward();
    assert_ne!(a.grad(), 0.0);

    graph.zero_grad();
    for v in [&a, &b, &c] {
        assert_eq!(v.grad(), 0.0);
    }
}

#[test]
fn test_truncate_keeps_earlier_nodes() {
    let graph = Graph::new();
    let w = graph.leaf_labeled(0.5, "w");
    let mark = graph.len();

    let x = graph.leaf(4.0);
    let y = &w * &x;
    y.backward();
    assert_eq!(w.grad(), 4.0);
    assert_eq!(graph.len(), 3);

    graph.truncate(mark);
    assert_eq!(graph.len(), 1);
    assert_eq!(w.value(), 0.5);
    assert_eq!(w.grad(), 4.0);

    let z = graph.leaf(1.0);
    assert_eq!(z.id().index(), 1);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "stale handle")]
fn test_stale_handle_detected_in_debug() {
    let graph = Graph::new();
    let _w = graph.leaf(0.5);
    let x = graph.leaf(4.0);
    graph.truncate(1);
    let _reused = graph.leaf(7.0);
    let _ = x.value();
}

#[test]
fn test_clones_share_the_arena() {
    let graph = Graph::new();
    let other = graph.clone();
    let a = other.leaf(1.0);
    assert!(graph.same_graph(a.graph()));
    assert_eq!(graph.len(), 1);
    assert!(!graph.same_graph(&Graph::new()));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "stale handle")]
fn test_backward_from_stale_handle_detected_in_debug() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = &a * 3.0;
    graph.truncate(1);
    let _c = &a + 10.0;
    b.backward();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "stale handle")]
fn test_parents_of_stale_handle_detected_in_debug() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = &a * 3.0;
    graph.truncate(1);
    let _c = &a + 10.0;
    let _ = b.parents();
}
