// src/ops/arithmetic/sub.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward pass structure for element-wise subtraction.
///
/// The upstream gradient flows unchanged to `a` and negated to `b`.
#[derive(Debug)]
struct SubBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let grad_b = grad_output.iter().map(|g| -g).collect();
        Ok(vec![grad_output.to_vec(), grad_b])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn name(&self) -> &'static str {
        "SubBackward"
    }
}

/// Element-wise `a - b` of two tensors with identical shapes.
///
/// # Errors
/// `ShapeMismatch` if the shapes differ.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, SynapseError> {
    apply_binary_op(
        a,
        b,
        |x, y| x - y,
        |a, b| Arc::new(SubBackward { a, b }),
        "sub_op",
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
