// src/ops/reduction/sum.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward pass structure for the full sum.
///
/// Every input element contributed once, so the upstream scalar is broadcast
/// to each of them.
#[derive(Debug)]
pub(crate) struct SumBackward {
    pub(crate) input: Tensor,
    pub(crate) numel: usize,
}

impl BackwardOp for SumBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let upstream = scalar_upstream(grad_output, "SumBackward")?;
        Ok(vec![vec![upstream; self.numel]])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }

    fn name(&self) -> &'static str {
        "SumBackward"
    }
}

pub(crate) fn scalar_upstream(grad_output: &[f64], rule: &str) -> Result<f64, SynapseError> {
    match grad_output {
        [g] => Ok(*g),
        _ => Err(SynapseError::BackwardError(format!(
            "{} expects a one-element upstream gradient, got {}",
            rule,
            grad_output.len()
        ))),
    }
}

/// Sums every element into a tensor of shape `[1]`.
pub fn sum_op(input: &Tensor) -> Result<Tensor, SynapseError> {
    let (total, numel, requires_grad) = {
        let guard = input.read_data();
        (guard.data.iter().sum::<f64>(), guard.numel(), guard.requires_grad)
    };

    let output = Tensor::new(vec![total], vec![1])?;
    if requires_grad {
        output.set_grad_fn(Arc::new(SumBackward {
            input: input.clone(),
            numel,
        }));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
