// src/ops/activation/mod.rs

pub mod relu;

pub use relu::relu_op;
