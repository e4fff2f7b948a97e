use thiserror::Error;

/// Custom error type for the Synapse framework.
///
/// Every variant is raised by a validation step that runs before any output
/// buffer is allocated, so an `Err` never leaves partially mutated state behind.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum SynapseError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Rank mismatch in {operation}: expected rank {expected}, got {actual}")]
    RankMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Dimension mismatch in {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid shape {shape:?}: every dimension must be a positive integer")]
    InvalidShape { shape: Vec<usize> },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("Backward called on non-scalar tensor with {numel} elements.")]
    BackwardNonScalar { numel: usize },

    #[error("Operation requires tensor to require grad, but it doesn't.")]
    RequiresGradNotMet,

    #[error("The computation graph has already been consumed by a backward pass; rebuild it with a new forward pass.")]
    GraphReleased,

    #[error("Backward error: {0}")]
    BackwardError(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
