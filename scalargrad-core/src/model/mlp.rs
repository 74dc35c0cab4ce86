use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::Initializer;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::value::Value;

/// A multi-layer perceptron: layers applied one after the other.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network reading `nin` inputs, with one layer per entry of
    /// `nouts` (the last entry is the output width).
    ///
    /// # Errors
    /// `ScalarGradError::EmptyNetwork` if `nouts` is empty.
    pub fn new(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        init: &mut dyn Initializer,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::EmptyNetwork);
        }

        let mut layers = Vec::with_capacity(nouts.len());
        let mut width = nin;
        for &nout in nouts {
            layers.push(Layer::new(graph, width, nout, init));
            width = nout;
        }

        let mlp = Mlp { layers };
        log::debug!(
            "Mlp created: {} inputs, layer widths {:?}, {} parameters",
            nin,
            nouts,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (k, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", k, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
