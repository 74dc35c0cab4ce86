use super::*;
use crate::nn::Init;

fn seeded(seed: u64) -> Box<dyn Initializer> {
    Init::default().build(Some(seed)).expect("valid init")
}

#[test]
fn test_mlp_parameter_count() {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], seeded(1).as_mut()).expect("mlp");
    // 4*(3+1) + 4*(4+1) + 1*(4+1)
    assert_eq!(mlp.parameters().len(), 41);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.nin(), 3);
    assert_eq!(mlp.nout(), 1);
}

#[test]
fn test_mlp_forward_widths() {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[5, 2], seeded(2).as_mut()).expect("mlp");
    let x = [graph.leaf(2.0), graph.leaf(3.0), graph.leaf(-1.0)];
    let outs = mlp.forward(&x).expect("forward");
    assert_eq!(outs.len(), 2);

    let single = Mlp::new(&graph, 3, &[4, 4, 1], seeded(3).as_mut()).expect("mlp");
    let out = single.forward(&x).expect("forward");
    assert_eq!(out.len(), 1);
    assert!((-1.0..=1.0).contains(&out[0].value()));
}

#[test]
fn test_mlp_empty_layers_rejected() {
    let graph = Graph::new();
    let result = Mlp::new(&graph, 3, &[], seeded(4).as_mut());
    assert_eq!(result.unwrap_err(), ScalarGradError::EmptyNetwork);
}

#[test]
fn test_mlp_zero_grad_after_backward() {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 2, &[2, 1], seeded(5).as_mut()).expect("mlp");
    let x = [graph.leaf(0.5), graph.leaf(0.5)];
    let out = mlp.forward(&x).expect("forward");
    out[0].backward();

    let params = mlp.parameters();
    let grad_sum: f64 = params.iter().map(Value::grad).sum();
    assert!(grad_sum.abs() > 1e-12);

    mlp.zero_grad();
    assert!(params.iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_mlp_named_parameters_are_hierarchical() {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 1, &[1, 1], &mut || 0.5).expect("mlp");
    let names: Vec<String> = mlp.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "layers.0.neurons.0.w0",
            "layers.0.neurons.0.b",
            "layers.1.neurons.0.w0",
            "layers.1.neurons.0.b",
        ]
    );
}

#[test]
fn test_mlp_forward_rejects_wrong_width() {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 2, &[3], &mut || 0.5).expect("mlp");
    assert_eq!(
        mlp.forward(&[graph.leaf(1.0)]).unwrap_err(),
        ScalarGradError::DimensionMismatch { expected: 2, actual: 1 }
    );
}
