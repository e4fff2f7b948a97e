// src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward pass structure for element-wise multiplication.
///
/// `dL/da = dL/dout * b` and `dL/db = dL/dout * a`. The operand values are read
/// when the rule runs, so mutating an operand between forward and backward
/// corrupts its partner's gradient.
#[derive(Debug)]
struct MulBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let a_values = self.a.data();
        let b_values = self.b.data();
        let grad_a = grad_output.iter().zip(&b_values).map(|(g, y)| g * y).collect();
        let grad_b = grad_output.iter().zip(&a_values).map(|(g, x)| g * x).collect();
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn name(&self) -> &'static str {
        "MulBackward"
    }
}

/// Element-wise (Hadamard) product of two tensors with identical shapes.
///
/// # Errors
/// `ShapeMismatch` if the shapes differ.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, SynapseError> {
    apply_binary_op(
        a,
        b,
        |x, y| x * y,
        |a, b| Arc::new(MulBackward { a, b }),
        "mul_op",
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
