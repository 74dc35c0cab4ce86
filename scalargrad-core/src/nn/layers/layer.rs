use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::Initializer;
use crate::nn::layers::Neuron;
use crate::nn::module::{check_inputs, Module};
use crate::value::Value;

/// A fully connected layer: `nout` neurons that all read the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    graph: Graph,
    nin: usize,
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer with `nout · (nin + 1)` parameters.
    ///
    /// # Arguments
    /// * `nin` - Number of inputs read by every neuron.
    /// * `nout` - Number of neurons, i.e. the output width.
    /// * `init` - Source of the initial weights. Biases start at zero.
    pub fn new(graph: &Graph, nin: usize, nout: usize, init: &mut dyn Initializer) -> Self {
        let neurons = (0..nout).map(|_| Neuron::new(graph, nin, init)).collect();
        Layer {
            graph: graph.clone(),
            nin,
            neurons,
        }
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        check_inputs(&self.graph, self.nin, inputs, "Layer::forward")?;
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::with_capacity(self.nout() * (self.nin + 1));
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
