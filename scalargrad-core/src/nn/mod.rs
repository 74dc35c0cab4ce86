// src/nn/mod.rs
// Parameter containers built from the primitive operations.

pub mod init;
pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use init::{Init, Initializer};
pub use layers::{Layer, Neuron};
pub use module::Module;
