// src/nn/layers/mod.rs

pub mod linear;
pub mod relu;

// Re-export key layer structs
pub use linear::Linear;
pub use relu::ReLU;
