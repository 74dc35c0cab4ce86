use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;

/// The base trait for all parameter containers (neurons, layers, networks).
///
/// Containers only compose the primitive operations; they own their
/// trainable leaves and expose them for gradient reset and optimizer steps.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass.
    ///
    /// # Arguments
    /// * `inputs`: One node per input feature, in order.
    ///
    /// # Returns
    /// One node per output feature, in order, or a `ScalarGradError` if the
    /// input width is wrong or an input belongs to another graph.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every trainable leaf along with a hierarchical name
    /// (e.g. `"layers.1.neurons.0.w2"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Returns every trainable leaf, in the same order as `named_parameters`.
    fn parameters(&self) -> Vec<Value> {
        self.named_parameters()
            .into_iter()
            .map(|(_, param)| param)
            .collect()
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Validates the inputs of a forward pass against the container's graph and width.
pub(crate) fn check_inputs(
    graph: &Graph,
    expected: usize,
    inputs: &[Value],
    operation: &str,
) -> Result<(), ScalarGradError> {
    if inputs.len() != expected {
        return Err(ScalarGradError::DimensionMismatch {
            expected,
            actual: inputs.len(),
        });
    }
    if inputs.iter().any(|x| !x.graph().same_graph(graph)) {
        return Err(ScalarGradError::ForeignNode {
            operation: operation.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
