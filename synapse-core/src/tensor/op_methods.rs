use crate::{error::SynapseError, ops, tensor::Tensor};

impl Tensor {
    pub fn add(&self, other: &Tensor) -> Result<Tensor, SynapseError> {
        ops::arithmetic::add_op(self, other)
    }

    pub fn sub(&self, other: &Tensor) -> Result<Tensor, SynapseError> {
        ops::arithmetic::sub_op(self, other)
    }

    pub fn mul(&self, other: &Tensor) -> Result<Tensor, SynapseError> {
        ops::arithmetic::mul_op(self, other)
    }

    pub fn relu(&self) -> Result<Tensor, SynapseError> {
        ops::activation::relu_op(self)
    }

    /// 2-D matrix product. See [`ops::linalg::matmul_op`].
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, SynapseError> {
        ops::linalg::matmul_op(self, other)
    }

    /// Fused `self · weightᵀ + bias`. See [`ops::linalg::linear_op`].
    pub fn linear(&self, weight: &Tensor, bias: &Tensor) -> Result<Tensor, SynapseError> {
        ops::linalg::linear_op(self, weight, bias)
    }
}
