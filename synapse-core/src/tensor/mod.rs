// src/tensor/mod.rs

use crate::error::SynapseError;
use crate::tensor_data::TensorData;
use std::sync::{Arc, RwLock};

mod autograd;
pub mod create;
mod debug;
mod op_methods;
mod reduction_methods;
mod traits;

// Re-export creation functions to make them public
pub use create::{full, ones, randn, randn_seeded, randn_with_rng, scalar, zeros, zeros_like};

/// Represents a dense, row-major, multi-dimensional array of `f64` values
/// paired with a gradient accumulator of the same length.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally:
/// 1.  **Shared Ownership:** a tensor consumed by several ops is referenced by
///     each of their backward nodes without copying its data (cheap clones).
/// 2.  **Interior Mutability:** the gradient accumulator and the autograd
///     metadata can be updated through a shared `&Tensor`.
pub struct Tensor {
    /// Arc for shared ownership, RwLock for interior mutability of TensorData.
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new leaf tensor from flat row-major data and a shape.
    ///
    /// The gradient accumulator is allocated and zeroed; `requires_grad` is false.
    ///
    /// # Errors
    /// * `TensorCreationError` if `data_vec.len()` differs from the product of `shape`.
    /// * `InvalidShape` if `shape` is empty or contains a zero.
    pub fn new(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, SynapseError> {
        let tensor_data = TensorData::new(data_vec, shape)?;
        Ok(Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        })
    }

    /// Returns a clone of the tensor's shape.
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a copy of the flat data.
    pub fn data(&self) -> Vec<f64> {
        self.read_data().data.clone()
    }

    /// Returns the single value of a one-element tensor.
    ///
    /// # Errors
    /// `ShapeMismatch` if the tensor holds more than one element.
    pub fn item(&self) -> Result<f64, SynapseError> {
        let guard = self.read_data();
        if guard.numel() != 1 {
            return Err(SynapseError::ShapeMismatch {
                expected: vec![1],
                actual: guard.shape.clone(),
                operation: "item".to_string(),
            });
        }
        Ok(guard.data[0])
    }

    /// Acquires a read lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }
}
