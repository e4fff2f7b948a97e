// src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward pass structure for ReLU.
///
/// The upstream gradient passes only where the forward input was strictly
/// positive. At exactly zero the subgradient 0 is used.
#[derive(Debug)]
struct ReluBackward {
    input: Tensor,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let input_values = self.input.data();
        let grad_input = grad_output
            .iter()
            .zip(&input_values)
            .map(|(&g, &x)| if x > 0.0 { g } else { 0.0 })
            .collect();
        Ok(vec![grad_input])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }

    fn name(&self) -> &'static str {
        "ReluBackward"
    }
}

/// Rectified linear unit, `max(0, x)` element-wise. NaN inputs stay NaN.
pub fn relu_op(input: &Tensor) -> Result<Tensor, SynapseError> {
    apply_unary_op(
        input,
        |x| if x > 0.0 || x.is_nan() { x } else { 0.0 },
        |input| Arc::new(ReluBackward { input }),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
