use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::Initializer;
use crate::nn::module::{check_inputs, Module};
use crate::value::Value;

/// A single unit computing `tanh(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    graph: Graph,
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from `init` and a zero bias.
    pub fn new(graph: &Graph, nin: usize, init: &mut dyn Initializer) -> Self {
        let weights = (0..nin)
            .map(|i| graph.leaf_labeled(init.sample(), format!("w{}", i)))
            .collect();
        let bias = graph.leaf_labeled(0.0, "b");
        Neuron {
            graph: graph.clone(),
            weights,
            bias,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes the neuron's output node for `inputs`.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        check_inputs(&self.graph, self.nin(), inputs, "Neuron::activate")?;
        let mut act = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = &act + &(w * x);
        }
        Ok(act.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        params.push(("b".to_string(), self.bias.clone()));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
