//! # Tensor Operations Module (`ops`)
//!
//! Differentiable primitives, grouped by category:
//!
//! - [`arithmetic`]: element-wise `add`, `sub`, `mul` on identically shaped tensors.
//! - [`activation`]: `relu`.
//! - [`reduction`]: `sum` and `mean` down to a one-element tensor.
//! - [`linalg`]: 2-D `matmul` and the fused affine `linear` op.
//!
//! Each operation has an `xxx_op` function that validates its operands, computes
//! the output buffer and, when at least one operand requires gradients, installs
//! a `XxxBackward` struct implementing [`BackwardOp`] as the output's `grad_fn`.

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::tensor::Tensor;
use std::sync::Arc;

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod reduction;

/// Applies a unary element-wise operation to a tensor.
///
/// `backward_builder` receives a handle on the input and is only called when
/// the input requires gradients.
pub(crate) fn apply_unary_op<F, B>(a: &Tensor, op: F, backward_builder: B) -> Result<Tensor, SynapseError>
where
    F: Fn(f64) -> f64,
    B: FnOnce(Tensor) -> Arc<dyn BackwardOp>,
{
    let (output_data, shape, requires_grad) = {
        let a_guard = a.read_data();
        let output_data: Vec<f64> = a_guard.data.iter().map(|&v| op(v)).collect();
        (output_data, a_guard.shape.clone(), a_guard.requires_grad)
    };

    let output = Tensor::new(output_data, shape)?;
    if requires_grad {
        output.set_grad_fn(backward_builder(a.clone()));
    }
    Ok(output)
}

/// Applies a binary element-wise operation to two tensors of identical shape.
///
/// The operands are read one after the other, so `a` and `b` may be the same
/// tensor. `backward_builder` receives handles on both operands and is only
/// called when at least one of them requires gradients.
///
/// # Errors
/// `ShapeMismatch` if the shapes differ. Nothing is allocated in that case.
pub(crate) fn apply_binary_op<F, B>(
    a: &Tensor,
    b: &Tensor,
    op: F,
    backward_builder: B,
    op_name: &str,
) -> Result<Tensor, SynapseError>
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce(Tensor, Tensor) -> Arc<dyn BackwardOp>,
{
    let a_shape = a.shape();
    let b_shape = b.shape();
    if a_shape != b_shape {
        return Err(SynapseError::ShapeMismatch {
            expected: a_shape,
            actual: b_shape,
            operation: op_name.to_string(),
        });
    }

    let (a_values, a_requires_grad) = {
        let guard = a.read_data();
        (guard.data.clone(), guard.requires_grad)
    };
    let (output_data, b_requires_grad) = {
        let guard = b.read_data();
        let output_data: Vec<f64> = a_values
            .iter()
            .zip(guard.data.iter())
            .map(|(&x, &y)| op(x, y))
            .collect();
        (output_data, guard.requires_grad)
    };

    let output = Tensor::new(output_data, a_shape)?;
    if a_requires_grad || b_requires_grad {
        output.set_grad_fn(backward_builder(a.clone(), b.clone()));
    }
    Ok(output)
}

/// Returns `(rows, cols)` of a rank-2 tensor shape.
pub(crate) fn matrix_dims(shape: &[usize], operation: &str) -> Result<(usize, usize), SynapseError> {
    if shape.len() != 2 {
        return Err(SynapseError::RankMismatch {
            expected: 2,
            actual: shape.len(),
            operation: operation.to_string(),
        });
    }
    Ok((shape[0], shape[1]))
}
