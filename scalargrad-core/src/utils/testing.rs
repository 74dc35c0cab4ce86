use crate::value::Value;

/// Checks that a node's gradient is within `tolerance` of `expected`.
/// Panics with the node's id and label otherwise.
pub fn check_grad_near(value: &Value, expected: f64, tolerance: f64) {
    let actual = value.grad();
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch at node {} ({:?}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            value.id().index(),
            value.label(),
            actual,
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks that the forward values of `actual` match `expected` element-wise.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let a = a.value();
        let diff = (a - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
