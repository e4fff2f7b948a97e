use super::*;
use crate::autograd::grad_check::check_grad;
use crate::ops::arithmetic::add_op;
use crate::ops::linalg::matmul_op;
use crate::ops::reduction::sum_op;
use crate::utils::testing::{check_tensor_near, create_test_tensor, create_test_tensor_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_linear_forward() {
    // x [2,3], W [2,3], b [1,2]
    let x = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
    let w = create_test_tensor(vec![1.0, 0.0, -1.0, 0.5, 0.5, 0.5], vec![2, 3]);
    let b = create_test_tensor(vec![10.0, -1.0], vec![1, 2]);
    let y = linear_op(&x, &w, &b).unwrap();
    check_tensor_near(&y, &[2, 2], &[8.0, 2.0, 8.0, 6.5], 1e-12);
}

#[test]
fn test_linear_shape_errors() {
    let x = create_test_tensor(vec![1.0; 6], vec![2, 3]);
    let w = create_test_tensor(vec![1.0; 8], vec![2, 4]);
    let b = create_test_tensor(vec![0.0; 2], vec![1, 2]);
    assert_eq!(
        linear_op(&x, &w, &b).unwrap_err(),
        SynapseError::DimensionMismatch {
            expected: 4,
            actual: 3,
            operation: "linear_op".to_string(),
        }
    );

    let w_ok = create_test_tensor(vec![1.0; 6], vec![2, 3]);
    let bad_bias = create_test_tensor(vec![0.0; 3], vec![1, 3]);
    assert!(matches!(
        linear_op(&x, &w_ok, &bad_bias),
        Err(SynapseError::DimensionMismatch { expected: 2, actual: 3, .. })
    ));

    let flat_x = create_test_tensor(vec![1.0; 3], vec![3]);
    assert!(matches!(
        linear_op(&flat_x, &w_ok, &b),
        Err(SynapseError::RankMismatch { .. })
    ));
}

#[test]
fn test_linear_backward_grad_check() {
    let x = create_test_tensor_with_grad(vec![0.2, -1.0, 0.5, 1.5, 2.0, -0.3, 0.0, 0.9], vec![2, 4]);
    let w = create_test_tensor_with_grad(
        vec![0.1, 0.2, -0.3, 0.4, -0.5, 0.6, 0.7, -0.8, 0.9, 1.0, -1.1, 1.2],
        vec![3, 4],
    );
    let b = create_test_tensor_with_grad(vec![0.5, -0.5, 1.0], vec![1, 3]);
    let output_grad = create_test_tensor(vec![1.0, -2.0, 0.5, 0.3, 0.7, -1.0], vec![2, 3]);
    check_grad(
        |inputs| linear_op(&inputs[0], &inputs[1], &inputs[2]),
        &[x, w, b],
        &output_grad,
        1e-6,
        1e-4,
    )
    .unwrap();
}

#[test]
fn test_linear_matches_matmul_composition() {
    // With a single-row batch, x·Wᵀ + b equals matmul(x, Wᵀ) + b.
    let x = create_test_tensor_with_grad(vec![1.0, -2.0], vec![1, 2]);
    let w = create_test_tensor_with_grad(vec![0.5, 1.0, -1.5, 2.0, 0.0, 3.0], vec![3, 2]);
    let w_t = create_test_tensor_with_grad(vec![0.5, -1.5, 0.0, 1.0, 2.0, 3.0], vec![2, 3]);
    let b = create_test_tensor_with_grad(vec![0.1, 0.2, 0.3], vec![1, 3]);
    let b2 = create_test_tensor_with_grad(vec![0.1, 0.2, 0.3], vec![1, 3]);

    let fused = sum_op(&linear_op(&x, &w, &b).unwrap()).unwrap();
    let x2 = create_test_tensor_with_grad(vec![1.0, -2.0], vec![1, 2]);
    let composed = sum_op(&add_op(&matmul_op(&x2, &w_t).unwrap(), &b2).unwrap()).unwrap();
    assert_relative_eq!(fused.item().unwrap(), composed.item().unwrap());

    fused.backward().unwrap();
    composed.backward().unwrap();
    for (g1, g2) in x.grad().iter().zip(x2.grad().iter()) {
        assert_relative_eq!(*g1, *g2);
    }
    assert_eq!(b.grad(), b2.grad());
}

#[test]
fn test_linear_no_grad_when_all_constant() {
    let x = create_test_tensor(vec![1.0, 2.0], vec![1, 2]);
    let w = create_test_tensor(vec![1.0, 1.0], vec![1, 2]);
    let b = create_test_tensor(vec![0.0], vec![1, 1]);
    let y = linear_op(&x, &w, &b).unwrap();
    assert!(!y.requires_grad());
    assert!(y.grad_fn().is_none());
}
