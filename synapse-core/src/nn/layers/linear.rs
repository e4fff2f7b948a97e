use crate::error::SynapseError;
use crate::nn::init::kaiming_normal_;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::linalg::linear_op;
use crate::tensor::{zeros, Tensor};
use rand::Rng;

/// Applies an affine transformation: `y = x · Wᵀ + b`.
///
/// * `weight`: `[out_features, in_features]`, Kaiming-normal initialized.
/// * `bias`: `[1, out_features]`, zero initialized.
#[derive(Debug, Clone)]
pub struct Linear {
    weight: Parameter,
    bias: Parameter,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a layer initialized from the thread RNG.
    pub fn new(in_features: usize, out_features: usize) -> Result<Self, SynapseError> {
        Self::with_rng(in_features, out_features, &mut rand::thread_rng())
    }

    /// Creates a layer whose weights are drawn from `rng`, for reproducible runs.
    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self, SynapseError> {
        let weight = zeros(&[out_features, in_features])?;
        kaiming_normal_(&weight, rng)?;
        let bias = zeros(&[1, out_features])?;

        Ok(Linear {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias: Parameter::new(bias, Some("bias".to_string())),
            in_features,
            out_features,
        })
    }

    /// Builds a layer from explicit weight `[out, in]` and bias `[1, out]` tensors.
    pub fn from_tensors(weight: Tensor, bias: Tensor) -> Result<Self, SynapseError> {
        let w_shape = weight.shape();
        let b_shape = bias.shape();
        if w_shape.len() != 2 {
            return Err(SynapseError::RankMismatch {
                expected: 2,
                actual: w_shape.len(),
                operation: "Linear::from_tensors".to_string(),
            });
        }
        let (out_features, in_features) = (w_shape[0], w_shape[1]);
        if b_shape != [1, out_features] {
            return Err(SynapseError::ShapeMismatch {
                expected: vec![1, out_features],
                actual: b_shape,
                operation: "Linear::from_tensors".to_string(),
            });
        }
        Ok(Linear {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias: Parameter::new(bias, Some("bias".to_string())),
            in_features,
            out_features,
        })
    }

    pub fn weight(&self) -> &Parameter {
        &self.weight
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, SynapseError> {
        linear_op(input, &self.weight, &self.bias)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        vec![&self.weight, &self.bias]
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        vec![
            ("weight".to_string(), &self.weight),
            ("bias".to_string(), &self.bias),
        ]
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
