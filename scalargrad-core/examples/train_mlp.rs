//! # Training a small MLP with plain gradient descent
//!
//! Fits a 3 → [4, 4] → 1 network to four labelled samples:
//! 1.  Builds the model's leaves once on a shared `Graph`.
//! 2.  Each step records the forward pass and a squared-error loss,
//!     runs `backward`, and moves every parameter against its gradient
//!     with `set_value`.
//! 3.  Truncates the graph back to the model's leaves so the arena does
//!     not grow from one step to the next.
//!
//! ## Running
//! `cargo run --example train_mlp`

use scalargrad_core::nn::{Init, Module};
use scalargrad_core::{Graph, Mlp, ScalarGradError, Value};

const LEARNING_RATE: f64 = 0.05;
const STEPS: usize = 100;

fn main() -> Result<(), ScalarGradError> {
    let _ = env_logger::builder().try_init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mut init = Init::default().build(Some(1337))?;
    let model = Mlp::new(&graph, 3, &[4, 4, 1], init.as_mut())?;
    let params = model.parameters();
    let model_len = graph.len();
    println!(
        "Model: {} parameters, {} nodes before training",
        params.len(),
        model_len
    );

    for step in 0..STEPS {
        let mut loss = graph.leaf(0.0);
        let mut predictions = Vec::with_capacity(xs.len());
        for (x, y) in xs.iter().zip(ys.iter()) {
            let inputs: Vec<Value> = x.iter().map(|&v| graph.leaf(v)).collect();
            let pred = model.forward(&inputs)?.remove(0);
            predictions.push(pred.value());
            let err = (&pred - *y).pow(2.0);
            loss = loss + err;
        }

        model.zero_grad();
        loss.backward();
        for p in &params {
            p.set_value(p.value() - LEARNING_RATE * p.grad());
        }

        if step % 10 == 0 || step == STEPS - 1 {
            println!(
                "step {:3}: loss = {:.6}, graph = {} nodes, predictions = {:.3?}",
                step,
                loss.value(),
                graph.len(),
                predictions
            );
        }

        drop(loss);
        graph.truncate(model_len);
    }

    Ok(())
}
