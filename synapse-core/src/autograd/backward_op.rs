// src/autograd/backward_op.rs

use crate::error::SynapseError;
use crate::tensor::Tensor;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable tensor operation.
///
/// Any operation that creates a tensor requiring gradients stores an
/// implementation of this trait in the output's `grad_fn` field. The backward
/// engine calls it exactly once per sweep, after every consumer of the output
/// has contributed to the output's gradient.
///
/// The trait requires `Debug + Send + Sync` because the `Arc<dyn BackwardOp>`
/// lives inside `TensorData`, which sits behind an `Arc<RwLock<_>>`.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes one gradient contribution per input, given `dL/dOutput`.
    ///
    /// # Arguments
    /// * `grad_output`: the accumulated gradient of this op's output, flat and
    ///   row-major, with the output's element count.
    ///
    /// # Returns
    /// * `Ok(Vec<Vec<f64>>)`: one buffer per entry of [`inputs`](Self::inputs), in
    ///   the same order, each with that input's element count. The engine adds
    ///   them into the inputs' accumulators; rules never write gradients themselves.
    /// * `Err(SynapseError)` if the rule cannot be evaluated.
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError>;

    /// The operands of the forward operation, in operand order.
    ///
    /// A tensor consumed twice by the same op (e.g. `mul(x, x)`) appears twice.
    fn inputs(&self) -> Vec<Tensor>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}
