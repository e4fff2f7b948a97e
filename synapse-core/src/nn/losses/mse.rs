// src/nn/losses/mse.rs

use crate::error::SynapseError;
use crate::ops::arithmetic::{mul_op, sub_op};
use crate::ops::reduction::{mean_op, sum_op};
use crate::tensor::Tensor;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = SynapseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(SynapseError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean squared error between `input` and `target`, as a `[1]` tensor.
///
/// Composed from `sub`, `mul` and `mean`, so its gradient comes from the engine.
pub fn mse_loss(input: &Tensor, target: &Tensor) -> Result<Tensor, SynapseError> {
    MSELoss::new(Reduction::Mean).calculate(input, target)
}

/// Computes the Mean Squared Error (MSE) loss between input and target tensors.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// # Errors
    /// `ShapeMismatch` if `input` and `target` shapes differ.
    pub fn calculate(&self, input: &Tensor, target: &Tensor) -> Result<Tensor, SynapseError> {
        let input_shape = input.shape();
        let target_shape = target.shape();
        if input_shape != target_shape {
            return Err(SynapseError::ShapeMismatch {
                expected: input_shape,
                actual: target_shape,
                operation: "MSELoss".to_string(),
            });
        }

        let diff = sub_op(input, target)?;
        let squared = mul_op(&diff, &diff)?;
        match self.reduction {
            Reduction::Mean => mean_op(&squared),
            Reduction::Sum => sum_op(&squared),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
