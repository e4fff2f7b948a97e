// src/autograd/grad_check.rs

use crate::error::SynapseError;
use crate::ops::arithmetic::mul_op;
use crate::ops::reduction::sum_op;
use crate::tensor::Tensor;
use approx::relative_eq;
use thiserror::Error;

/// Errors that can occur during gradient checking.
#[derive(Error, Debug)]
pub enum GradCheckError {
    #[error("Gradient check failed for input tensor at index {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(SynapseError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(SynapseError),
    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(SynapseError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },
    #[error("Gradient check input tensor must be a leaf node (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

impl From<SynapseError> for GradCheckError {
    fn from(err: SynapseError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// The scalar objective is `L = Σ func(inputs) * output_grad`, so the analytical
/// gradient of each input is `output_grad` pulled back through `func`.
/// Inputs that do not require gradients are left unchecked.
///
/// Each element is perturbed by `±epsilon` and the resulting numerical derivative
/// is compared with the analytical one using both an absolute and a relative
/// tolerance of `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    output_grad: &Tensor,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, SynapseError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        if input.requires_grad() {
            input.zero_grad();
        }
    }

    // --- 1. Analytical gradients through the engine ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    let any_input_requires_grad = inputs.iter().any(|t| t.requires_grad());
    if any_input_requires_grad != output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    if !any_input_requires_grad {
        return Ok(());
    }
    let weighted = mul_op(&output, output_grad)?;
    let loss = sum_op(&weighted)?;
    loss.backward().map_err(GradCheckError::BackwardPassError)?;

    let analytical_grads: Vec<Vec<f64>> = inputs.iter().map(|t| t.grad()).collect();

    // --- 2. Numerical gradients, element by element ---
    let weights = output_grad.data();
    for (i, original_input) in inputs.iter().enumerate() {
        if !original_input.requires_grad() {
            continue;
        }
        let original_data = original_input.data();
        let shape = original_input.shape();

        for elem_idx in 0..original_data.len() {
            let evaluate = |delta: f64| -> Result<f64, GradCheckError> {
                let mut perturbed_data = original_data.clone();
                perturbed_data[elem_idx] += delta;
                let mut perturbed_inputs = inputs.to_vec();
                perturbed_inputs[i] = Tensor::new(perturbed_data, shape.clone())?;
                let out = func(&perturbed_inputs).map_err(GradCheckError::ForwardPassError)?;
                weighted_sum(&out.data(), &weights)
            };
            let loss_plus = evaluate(epsilon)?;
            let loss_minus = evaluate(-epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            let analytical_grad = analytical_grads[i][elem_idx];

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    value: analytical_grad,
                });
            }

            if !relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

fn weighted_sum(values: &[f64], weights: &[f64]) -> Result<f64, GradCheckError> {
    if values.len() != weights.len() {
        return Err(GradCheckError::TensorError(SynapseError::ShapeMismatch {
            expected: vec![weights.len()],
            actual: vec![values.len()],
            operation: "weighted_sum (grad_check)".to_string(),
        }));
    }
    Ok(values.iter().zip(weights).map(|(v, w)| v * w).sum())
}
