// src/model/mod.rs
// Containers composed of layers.

pub mod mlp;

pub use mlp::Mlp;
