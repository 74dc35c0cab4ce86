use scalargrad_core::nn::{Init, Module};
use scalargrad_core::{Graph, Mlp, Value};

mod common;
use common::{init_logger, leaves};

const XS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];
const YS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

fn total_loss(graph: &Graph, model: &Mlp) -> Value {
    let mut loss = graph.leaf(0.0);
    for (x, y) in XS.iter().zip(YS.iter()) {
        let pred = model.forward(&leaves(graph, x)).expect("forward").remove(0);
        loss = loss + (&pred - *y).pow(2.0);
    }
    loss
}

#[test]
fn test_gradient_descent_reduces_loss() {
    init_logger();
    let graph = Graph::new();
    let mut init = Init::default().build(Some(2024)).expect("init");
    let model = Mlp::new(&graph, 3, &[4, 4, 1], init.as_mut()).expect("mlp");
    let params = model.parameters();
    assert_eq!(params.len(), 41);
    let model_len = graph.len();

    let mut first = None;
    let mut last = f64::INFINITY;
    for _ in 0..60 {
        let loss = total_loss(&graph, &model);
        model.zero_grad();
        loss.backward();
        for p in &params {
            p.set_value(p.value() - 0.05 * p.grad());
        }
        last = loss.value();
        first.get_or_insert(last);
        drop(loss);
        graph.truncate(model_len);
        assert_eq!(graph.len(), model_len);
    }
    let first = first.expect("at least one step");
    assert!(last < first, "loss did not decrease: {} -> {}", first, last);
}

#[test]
fn test_truncate_keeps_parameters_usable() {
    init_logger();
    let graph = Graph::new();
    let model = Mlp::new(&graph, 3, &[2, 1], &mut || 0.25).expect("mlp");
    let model_len = graph.len();

    let before = total_loss(&graph, &model).value();
    graph.truncate(model_len);
    let after = total_loss(&graph, &model).value();
    assert_eq!(before, after);
    for p in model.parameters() {
        assert!(p.id().index() < model_len);
    }
}

#[test]
fn test_same_seed_same_network() {
    let build = || {
        let graph = Graph::new();
        let mut init = Init::default().build(Some(9)).expect("init");
        let model = Mlp::new(&graph, 3, &[4, 1], init.as_mut()).expect("mlp");
        let out = model.forward(&leaves(&graph, &XS[0])).expect("forward");
        out[0].value()
    };
    assert_eq!(build(), build());
}
