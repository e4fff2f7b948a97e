// src/ops/linalg/matmul.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::ops::matrix_dims;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward pass structure for 2-D matrix multiplication `C = A · B`.
///
/// With `A [m,k]`, `B [k,n]` and upstream `G [m,n]`:
/// `dA = G · Bᵀ` (`[m,k]`) and `dB = Aᵀ · G` (`[k,n]`).
#[derive(Debug)]
struct MatmulBackward {
    a: Tensor,
    b: Tensor,
    m: usize,
    k: usize,
    n: usize,
}

impl BackwardOp for MatmulBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let (m, k, n) = (self.m, self.k, self.n);
        let a_values = self.a.data();
        let b_values = self.b.data();

        let mut grad_a = vec![0.0; m * k];
        for i in 0..m {
            for t in 0..k {
                grad_a[i * k + t] = (0..n).map(|j| grad_output[i * n + j] * b_values[t * n + j]).sum();
            }
        }

        let mut grad_b = vec![0.0; k * n];
        for t in 0..k {
            for j in 0..n {
                grad_b[t * n + j] = (0..m).map(|i| a_values[i * k + t] * grad_output[i * n + j]).sum();
            }
        }

        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn name(&self) -> &'static str {
        "MatmulBackward"
    }
}

/// Naive row-major `[m,k] × [k,n]` kernel.
pub(crate) fn matmul_kernel(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * n];
    for i in 0..m {
        for t in 0..k {
            let a_it = a[i * k + t];
            for j in 0..n {
                out[i * n + j] += a_it * b[t * n + j];
            }
        }
    }
    out
}

/// Dense matrix product of two rank-2 tensors.
///
/// # Errors
/// * `RankMismatch` if either operand is not rank 2.
/// * `DimensionMismatch` if the inner dimensions differ.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, SynapseError> {
    let (m, k) = matrix_dims(&a.shape(), "matmul_op")?;
    let (k2, n) = matrix_dims(&b.shape(), "matmul_op")?;
    if k != k2 {
        return Err(SynapseError::DimensionMismatch {
            expected: k,
            actual: k2,
            operation: "matmul_op".to_string(),
        });
    }

    let (a_values, a_requires_grad) = {
        let guard = a.read_data();
        (guard.data.clone(), guard.requires_grad)
    };
    let (output_data, b_requires_grad) = {
        let guard = b.read_data();
        (matmul_kernel(&a_values, &guard.data, m, k, n), guard.requires_grad)
    };

    let output = Tensor::new(output_data, vec![m, n])?;
    if a_requires_grad || b_requires_grad {
        output.set_grad_fn(Arc::new(MatmulBackward {
            a: a.clone(),
            b: b.clone(),
            m,
            k,
            n,
        }));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
