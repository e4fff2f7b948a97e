// src/tensor/autograd.rs

use crate::{
    autograd::{graph::topological_sort, BackwardOp, NodeId},
    error::SynapseError,
    tensor::Tensor,
};
use log::{debug, trace, warn};
use std::sync::Arc;

impl Tensor {
    /// Checks if the tensor requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` flag and returns the tensor for chaining.
    ///
    /// Only leaves can be toggled. On a tensor produced by an op the call logs a
    /// warning and leaves the flag unchanged.
    pub fn set_requires_grad(self, requires_grad: bool) -> Self {
        {
            let mut guard = self.write_data();
            if !guard.is_leaf() {
                warn!(
                    "set_requires_grad({}) ignored on non-leaf tensor with shape {:?}",
                    requires_grad, guard.shape
                );
            } else {
                guard.requires_grad = requires_grad;
            }
        }
        self
    }

    /// True when no op produced this tensor and no backward pass has released it.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the backward node that produced this tensor, if any.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Returns a snapshot of the gradient accumulator.
    pub fn grad(&self) -> Vec<f64> {
        self.read_data().grad.clone()
    }

    /// Resets the gradient accumulator to zero. Data is untouched.
    pub fn zero_grad(&self) {
        self.write_data().grad.iter_mut().for_each(|g| *g = 0.0);
    }

    /// Identity of this tensor as a graph node.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    pub(crate) fn set_grad_fn(&self, grad_fn: Arc<dyn BackwardOp>) {
        let mut guard = self.write_data();
        guard.requires_grad = true;
        guard.grad_fn = Some(grad_fn);
    }

    /// Adds `contribution` into the accumulator. A no-op if the tensor does not require grad.
    pub(crate) fn accumulate_grad(&self, contribution: &[f64]) -> Result<(), SynapseError> {
        let mut guard = self.write_data();
        if !guard.requires_grad {
            return Ok(());
        }
        if guard.grad.len() != contribution.len() {
            return Err(SynapseError::BackwardError(format!(
                "gradient contribution of length {} for tensor of shape {:?}",
                contribution.len(),
                guard.shape
            )));
        }
        guard
            .grad
            .iter_mut()
            .zip(contribution)
            .for_each(|(g, c)| *g += c);
        Ok(())
    }

    /// Computes the gradient of this scalar tensor with respect to every tensor
    /// in its graph that requires gradients.
    ///
    /// The root gradient is reset to `1.0`, nodes are visited in reverse
    /// topological order and each `grad_fn` is applied exactly once. Afterwards
    /// every non-leaf node of the graph drops its `grad_fn`: the graph cannot be
    /// swept twice.
    ///
    /// # Errors
    /// * `BackwardNonScalar` if the tensor has more than one element.
    /// * `GraphReleased` if a previous sweep already consumed this graph or any
    ///   node reachable from this tensor.
    /// * `RequiresGradNotMet` if the tensor does not require gradients.
    pub fn backward(&self) -> Result<(), SynapseError> {
        {
            let guard = self.read_data();
            if guard.numel() != 1 {
                return Err(SynapseError::BackwardNonScalar {
                    numel: guard.numel(),
                });
            }
            if guard.graph_released {
                return Err(SynapseError::GraphReleased);
            }
            if !guard.requires_grad {
                return Err(SynapseError::RequiresGradNotMet);
            }
        }

        let order = topological_sort(self)?;

        {
            let mut guard = self.write_data();
            guard.grad.iter_mut().for_each(|g| *g = 0.0);
            guard.grad[0] = 1.0;
        }

        debug!("backward: sweeping {} nodes", order.len());

        for node in order.iter().rev() {
            let (grad_fn, grad_output) = {
                let guard = node.read_data();
                match &guard.grad_fn {
                    Some(grad_fn) => (Arc::clone(grad_fn), guard.grad.clone()),
                    None => continue,
                }
            };
            trace!("backward: applying {}", grad_fn.name());

            let inputs = grad_fn.inputs();
            let contributions = grad_fn.backward(&grad_output)?;
            if contributions.len() != inputs.len() {
                return Err(SynapseError::BackwardError(format!(
                    "{} returned {} gradients for {} inputs",
                    grad_fn.name(),
                    contributions.len(),
                    inputs.len()
                )));
            }
            for (input, contribution) in inputs.iter().zip(contributions.iter()) {
                input.accumulate_grad(contribution)?;
            }
        }

        let mut released = 0;
        for node in &order {
            let mut guard = node.write_data();
            if guard.grad_fn.take().is_some() {
                guard.graph_released = true;
                released += 1;
            }
        }
        debug!("backward: done, released {} graph nodes", released);

        Ok(())
    }
}
