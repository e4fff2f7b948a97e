use crate::{error::SynapseError, tensor::Tensor};

impl Tensor {
    /// Sums all elements into a `[1]` tensor.
    /// Delegates to `ops::reduction::sum_op`.
    pub fn sum(&self) -> Result<Tensor, SynapseError> {
        crate::ops::reduction::sum_op(self)
    }

    /// Mean of all elements as a `[1]` tensor.
    /// Delegates to `ops::reduction::mean_op`.
    pub fn mean(&self) -> Result<Tensor, SynapseError> {
        crate::ops::reduction::mean_op(self)
    }
}
