// src/ops/linalg/linear.rs

use crate::autograd::BackwardOp;
use crate::error::SynapseError;
use crate::ops::linalg::matmul::matmul_kernel;
use crate::ops::matrix_dims;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward pass structure for the fused affine transform `y = x · Wᵀ + b`.
///
/// With upstream `G [batch,out]`:
/// * `dx[b,i] = Σ_j G[b,j] · W[j,i]`
/// * `dW[j,i] = Σ_b G[b,j] · x[b,i]`
/// * `db[j] = Σ_b G[b,j]`
#[derive(Debug)]
struct LinearBackward {
    input: Tensor,
    weight: Tensor,
    bias: Tensor,
    batch: usize,
    in_features: usize,
    out_features: usize,
}

impl BackwardOp for LinearBackward {
    fn backward(&self, grad_output: &[f64]) -> Result<Vec<Vec<f64>>, SynapseError> {
        let (batch, in_f, out_f) = (self.batch, self.in_features, self.out_features);
        let x = self.input.data();
        let w = self.weight.data();

        // G [batch,out] · W [out,in]
        let grad_input = matmul_kernel(grad_output, &w, batch, out_f, in_f);

        let mut grad_weight = vec![0.0; out_f * in_f];
        let mut grad_bias = vec![0.0; out_f];
        for b in 0..batch {
            for j in 0..out_f {
                let g = grad_output[b * out_f + j];
                grad_bias[j] += g;
                for i in 0..in_f {
                    grad_weight[j * in_f + i] += g * x[b * in_f + i];
                }
            }
        }

        Ok(vec![grad_input, grad_weight, grad_bias])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone(), self.weight.clone(), self.bias.clone()]
    }

    fn name(&self) -> &'static str {
        "LinearBackward"
    }
}

/// Fused affine transform: `input [batch,in] · weightᵀ [in,out] + bias [1,out]`.
///
/// The bias row is added to every row of the product.
///
/// # Errors
/// * `RankMismatch` if any operand is not rank 2.
/// * `DimensionMismatch` if `input`'s feature dimension differs from `in`, or the
///   bias is not `[1, out]`.
pub fn linear_op(input: &Tensor, weight: &Tensor, bias: &Tensor) -> Result<Tensor, SynapseError> {
    let (batch, in_features) = matrix_dims(&input.shape(), "linear_op")?;
    let (out_features, weight_in) = matrix_dims(&weight.shape(), "linear_op")?;
    let (bias_rows, bias_cols) = matrix_dims(&bias.shape(), "linear_op")?;
    if in_features != weight_in {
        return Err(SynapseError::DimensionMismatch {
            expected: weight_in,
            actual: in_features,
            operation: "linear_op".to_string(),
        });
    }
    if bias_cols != out_features {
        return Err(SynapseError::DimensionMismatch {
            expected: out_features,
            actual: bias_cols,
            operation: "linear_op (bias)".to_string(),
        });
    }
    if bias_rows != 1 {
        return Err(SynapseError::DimensionMismatch {
            expected: 1,
            actual: bias_rows,
            operation: "linear_op (bias rows)".to_string(),
        });
    }

    let (x, x_rg) = {
        let guard = input.read_data();
        (guard.data.clone(), guard.requires_grad)
    };
    let (w, w_rg) = {
        let guard = weight.read_data();
        (guard.data.clone(), guard.requires_grad)
    };
    let (bias_values, b_rg) = {
        let guard = bias.read_data();
        (guard.data.clone(), guard.requires_grad)
    };

    let mut output_data = vec![0.0; batch * out_features];
    for b in 0..batch {
        for j in 0..out_features {
            let dot: f64 = (0..in_features)
                .map(|i| x[b * in_features + i] * w[j * in_features + i])
                .sum();
            output_data[b * out_features + j] = dot + bias_values[j];
        }
    }

    let output = Tensor::new(output_data, vec![batch, out_features])?;
    if x_rg || w_rg || b_rg {
        output.set_grad_fn(Arc::new(LinearBackward {
            input: input.clone(),
            weight: weight.clone(),
            bias: bias.clone(),
            batch,
            in_features,
            out_features,
        }));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
