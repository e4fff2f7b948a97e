// src/autograd/mod.rs

// Declare the modules within the autograd directory
pub mod backward_op;
pub mod grad_check;
pub mod graph;

// Re-export the core pieces for easier access
pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, NodeId};
