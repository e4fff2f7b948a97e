use crate::error::SynapseError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the accumulated gradients.
    fn step(&mut self) -> Result<(), SynapseError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this is called once
    /// per training iteration, before the backward pass.
    fn zero_grad(&mut self);
}
