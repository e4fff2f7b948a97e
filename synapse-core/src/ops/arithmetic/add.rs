// src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;
use std::sync::Arc;

// --- Backward Operation Structure ---

/// Backward pass structure for element-wise addition.
///
/// `d(a + b)/da = d(a + b)/db = 1`: the upstream gradient flows unchanged to both operands.
#[derive(Debug)]
struct AddBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        Ok(vec![grad_output.to_vec(), grad_output.to_vec()])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn name(&self) -> &'static str {
        "AddBackward"
    }
}

// --- Forward Operation ---

/// Element-wise `a + b` of two tensors with identical shapes.
///
/// # Errors
/// `ShapeMismatch` if the shapes differ.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, SynapseError> {
    apply_binary_op(
        a,
        b,
        |x, y| x + y,
        |a, b| Arc::new(AddBackward { a, b }),
        "add_op",
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
