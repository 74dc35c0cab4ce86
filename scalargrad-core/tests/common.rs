use scalargrad_core::{Graph, Value};

// Each integration test crate includes this module; not every helper is used by all of them.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn leaves(graph: &Graph, values: &[f64]) -> Vec<Value> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}
