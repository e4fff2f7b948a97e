// src/tensor_data.rs
use std::fmt;
use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::error::SynapseError;

/// Internal storage and metadata for a Tensor.
///
/// It is wrapped in `Arc<RwLock<TensorData>>` by the `Tensor` struct to allow
/// shared ownership (a buffer may feed several downstream ops) and interior
/// mutability of the gradient accumulator.
pub struct TensorData {
    /// Flat row-major values. Length is always `numel()`.
    pub(crate) data: Vec<f64>,
    /// Gradient accumulator, same length as `data`, starts at zero.
    pub(crate) grad: Vec<f64>,
    /// The shape (dimensions) of the tensor. Immutable after construction.
    pub(crate) shape: Vec<usize>,

    // --- Autograd Metadata ---
    /// If true, operations consuming this tensor are recorded in the graph.
    pub(crate) requires_grad: bool,
    /// The backward node that produced this tensor. `None` for leaves and for
    /// outputs that do not require gradients.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp>>,
    /// Set once a backward pass has swept through this (non-leaf) node.
    pub(crate) graph_released: bool,
}

impl TensorData {
    /// Creates a new `TensorData` from flat data and a shape.
    ///
    /// # Errors
    /// * `InvalidShape` if the shape is empty or has a zero extent.
    /// * `TensorCreationError` if `data_vec.len()` differs from the shape's element count.
    pub fn new(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, SynapseError> {
        validate_shape(&shape)?;
        let numel: usize = shape.iter().product();
        let data_len = data_vec.len();
        if data_len != numel {
            return Err(SynapseError::TensorCreationError { data_len, shape });
        }

        Ok(TensorData {
            data: data_vec,
            grad: vec![0.0; numel],
            shape,
            requires_grad: false,
            grad_fn: None,
            graph_released: false,
        })
    }

    /// Returns the total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// A leaf has no backward node and was never an interior node of a swept graph.
    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none() && !self.graph_released
    }
}

impl fmt::Debug for TensorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorData")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .field("requires_grad", &self.requires_grad)
            .field("grad_fn", &self.grad_fn)
            .finish()
    }
}

/// Rejects empty shapes and shapes containing a zero extent.
pub(crate) fn validate_shape(shape: &[usize]) -> Result<(), SynapseError> {
    if shape.is_empty() || shape.iter().any(|&d| d == 0) {
        return Err(SynapseError::InvalidShape {
            shape: shape.to_vec(),
        });
    }
    Ok(())
}
