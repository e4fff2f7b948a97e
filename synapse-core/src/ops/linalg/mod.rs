// src/ops/linalg/mod.rs

pub mod linear;
pub mod matmul;

pub use linear::linear_op;
pub use matmul::matmul_op;
