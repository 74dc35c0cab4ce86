use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Error during gradient check: {0}")]
    Graph(#[from] ScalarGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar output from leaves holding `inputs`, inside the graph
/// it is given. It is evaluated once for the analytical gradients and twice per
/// input for `(f(x + eps) - f(x - eps)) / (2 eps)`, each time in a fresh graph.
///
/// The check for input `i` passes when
/// `|analytical - numerical| <= tolerance * max(1, |analytical|, |numerical|)`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, ScalarGradError>,
{
    let analytical = analytical_grads(&func, inputs)?;

    let mut shifted = inputs.to_vec();
    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index,
                value: analytical_grad,
            });
        }

        let original = shifted[input_index];
        shifted[input_index] = original + epsilon;
        let loss_plus = evaluate(&func, &shifted)?;
        shifted[input_index] = original - epsilon;
        let loss_minus = evaluate(&func, &shifted)?;
        shifted[input_index] = original;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let scale = 1.0_f64.max(analytical_grad.abs()).max(numerical_grad.abs());
        if !approx::abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance * scale) {
            let difference = (analytical_grad - numerical_grad).abs();
            log::warn!(
                "grad check mismatch at input {}: analytical {} vs numerical {}",
                input_index,
                analytical_grad,
                numerical_grad
            );
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

fn analytical_grads<F>(func: &F, inputs: &[f64]) -> Result<Vec<f64>, ScalarGradError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves)?;
    output.backward();
    Ok(leaves.iter().map(Value::grad).collect())
}

fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, ScalarGradError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    Ok(func(&graph, &leaves)?.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
