// src/inference.rs

//! In-process prediction boundary: rows of plain `f64` in, rows out.

use crate::error::SynapseError;
use crate::model::Sequential;
use crate::nn::{Linear, Module, ReLU};
use crate::tensor::Tensor;
use log::debug;
use rand::Rng;

/// Wraps a model and runs single forward passes over 2-D payloads.
#[derive(Debug)]
pub struct Predictor<M: Module> {
    model: M,
    in_features: usize,
}

impl<M: Module> Predictor<M> {
    /// `in_features` is the row width every request must have.
    pub fn new(model: M, in_features: usize) -> Self {
        Predictor { model, in_features }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Runs one forward pass over `input` (`[batch][in_features]`).
    ///
    /// The payload is copied into a tensor that does not require gradients, so
    /// no gradient is accumulated into the model's parameters.
    ///
    /// # Errors
    /// * `EmptyInput` if there are no rows.
    /// * `ShapeMismatch` if the rows do not all have the same width.
    /// * `DimensionMismatch` if the row width differs from `in_features`.
    pub fn predict(&self, input: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let first = input
            .first()
            .ok_or_else(|| SynapseError::EmptyInput("predict received no rows".to_string()))?;
        let features = first.len();
        if let Some(row) = input.iter().find(|row| row.len() != features) {
            return Err(SynapseError::ShapeMismatch {
                expected: vec![features],
                actual: vec![row.len()],
                operation: "predict".to_string(),
            });
        }
        if features != self.in_features {
            return Err(SynapseError::DimensionMismatch {
                expected: self.in_features,
                actual: features,
                operation: "predict".to_string(),
            });
        }

        let batch = input.len();
        let x = Tensor::new(input.concat(), vec![batch, features])?;
        let out = self.model.forward(&x)?;
        let out_shape = out.shape();
        let cols = out_shape.last().copied().unwrap_or(1);
        debug!("predict: [{}, {}] -> {:?}", batch, features, out_shape);

        Ok(out.data().chunks(cols).map(|row| row.to_vec()).collect())
    }
}

impl Predictor<Sequential> {
    /// The stock `Linear(4, 16) -> ReLU -> Linear(16, 2)` network.
    pub fn default_mlp() -> Result<Self, SynapseError> {
        Self::default_mlp_with_rng(&mut rand::thread_rng())
    }

    pub fn default_mlp_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, SynapseError> {
        let model = Sequential::new()
            .with(Box::new(Linear::with_rng(4, 16, rng)?))
            .with(Box::new(ReLU::new()))
            .with(Box::new(Linear::with_rng(16, 2, rng)?));
        Ok(Predictor::new(model, 4))
    }
}
