// src/ops/reduction/mod.rs

pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;
