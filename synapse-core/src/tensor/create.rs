// src/tensor/create.rs

use crate::error::SynapseError;
use crate::tensor::Tensor;
use crate::tensor_data::{validate_shape, TensorData};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::sync::{Arc, RwLock};

/// Standard deviation of the small-noise initializer used by `randn`.
pub const RANDN_SCALE: f64 = 0.01;

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor, SynapseError> {
    full(shape, 0.0)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor, SynapseError> {
    full(shape, 1.0)
}

/// Creates a new tensor filled with `value`.
pub fn full(shape: &[usize], value: f64) -> Result<Tensor, SynapseError> {
    validate_shape(shape)?;
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a one-element tensor of shape `[1]`.
pub fn scalar(value: f64) -> Tensor {
    Tensor {
        data: Arc::new(RwLock::new(TensorData {
            data: vec![value],
            grad: vec![0.0],
            shape: vec![1],
            requires_grad: false,
            grad_fn: None,
            graph_released: false,
        })),
    }
}

/// Creates a zero tensor with the same shape as `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, SynapseError> {
    zeros(&tensor.shape())
}

/// Creates a tensor of small Gaussian noise, `N(0, 1) * 0.01`, from the thread RNG.
pub fn randn(shape: &[usize]) -> Result<Tensor, SynapseError> {
    randn_with_rng(shape, &mut rand::thread_rng())
}

/// Same as [`randn`] but reproducible from `seed`.
pub fn randn_seeded(shape: &[usize], seed: u64) -> Result<Tensor, SynapseError> {
    let mut rng = StdRng::seed_from_u64(seed);
    randn_with_rng(shape, &mut rng)
}

/// Small-noise initializer drawing from a caller supplied RNG.
pub fn randn_with_rng<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Result<Tensor, SynapseError> {
    validate_shape(shape)?;
    let numel: usize = shape.iter().product();
    let data_vec: Vec<f64> = (0..numel)
        .map(|_| rng.sample::<f64, _>(StandardNormal) * RANDN_SCALE)
        .collect();
    Tensor::new(data_vec, shape.to_vec())
}
