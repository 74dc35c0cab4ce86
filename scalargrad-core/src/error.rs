use thiserror::Error;

/// Custom error type for the scalargrad crate.
///
/// The numeric core (node construction, primitive operations, backward) never
/// fails; these variants cover the parameter containers and their configuration.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Node passed to {operation} belongs to a different graph")]
    ForeignNode { operation: String },

    #[error("Cannot build a network without any layer sizes")]
    EmptyNetwork,

    #[error("Invalid initializer configuration: {0}")]
    InvalidInitializer(String),
}
