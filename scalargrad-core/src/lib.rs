//! Scalar reverse-mode automatic differentiation.
//!
//! Every number is a node of a [`Graph`]. Primitive operations append nodes
//! that remember their operands, and [`Value::backward`] fills in the
//! gradient of one output with respect to every ancestor:
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf_labeled(2.0, "a");
//! let b = graph.leaf_labeled(3.0, "b");
//! let c = &a * &b + 1.0;
//! c.backward();
//!
//! assert_eq!(c.value(), 7.0);
//! assert_eq!(a.grad(), 3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod model;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;

pub use error::ScalarGradError;
pub use graph::{Graph, NodeId, Op};
pub use model::Mlp;
pub use value::Value;
// Re-export traits required by public functions
pub use num_traits;
