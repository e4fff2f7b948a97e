// src/ops/reduction/mean.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::ops::reduction::sum::{scalar_upstream, SumBackward};
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward pass structure for the full mean.
///
/// `mean = sum * (1 / numel)`: the upstream scalar is pre-scaled and handed to
/// the sum rule.
#[derive(Debug)]
struct MeanBackward {
    sum: SumBackward,
    scale: f64,
}

impl BackwardOp for MeanBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let upstream = scalar_upstream(grad_output, "MeanBackward")?;
        self.sum.backward(&[upstream * self.scale])
    }

    fn inputs(&self) -> Vec<Tensor> {
        self.sum.inputs()
    }

    fn name(&self) -> &'static str {
        "MeanBackward"
    }
}

/// Arithmetic mean of every element, as a tensor of shape `[1]`.
pub fn mean_op(input: &Tensor) -> Result<Tensor, SynapseError> {
    let (total, numel, requires_grad) = {
        let guard = input.read_data();
        (guard.data.iter().sum::<f64>(), guard.numel(), guard.requires_grad)
    };
    let scale = 1.0 / numel as f64;

    let output = Tensor::new(vec![total * scale], vec![1])?;
    if requires_grad {
        output.set_grad_fn(Arc::new(MeanBackward {
            sum: SumBackward {
                input: input.clone(),
                numel,
            },
            scale,
        }));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
