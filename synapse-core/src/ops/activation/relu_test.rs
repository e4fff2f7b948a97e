use super::*;
use crate::autograd::grad_check::check_grad;
use crate::ops::reduction::sum_op;
use crate::utils::testing::{check_tensor_near, create_test_tensor, create_test_tensor_with_grad};

#[test]
fn test_relu_forward() {
    let input = create_test_tensor(vec![-1.0, 0.0, 1.0, -2.0, 3.0, -0.5], vec![2, 3]);
    let result = relu_op(&input).unwrap();
    check_tensor_near(&result, &[2, 3], &[0.0, 0.0, 1.0, 0.0, 3.0, 0.0], 1e-12);
    assert!(!result.requires_grad());
}

#[test]
fn test_relu_backward_mask() {
    let input = create_test_tensor_with_grad(vec![-1.0, 0.0, 2.0, 5.0], vec![4]);
    let loss = sum_op(&relu_op(&input).unwrap()).unwrap();
    loss.backward().unwrap();
    // Zero is not strictly positive, so no gradient flows there.
    assert_eq!(input.grad(), vec![0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_relu_backward_grad_check() {
    // Values kept away from the kink at 0 for finite differences.
    let input = create_test_tensor_with_grad(vec![-1.5, 0.7, 2.0, -0.3, 1.1, -4.0], vec![3, 2]);
    let output_grad = create_test_tensor(vec![1.0, 2.0, -0.5, 3.0, 0.25, 1.0], vec![3, 2]);
    check_grad(|inputs| relu_op(&inputs[0]), &[input], &output_grad, 1e-6, 1e-4).unwrap();
}

#[test]
fn test_relu_propagates_nan() {
    let input = create_test_tensor(vec![f64::NAN, -1.0, 2.0], vec![3]);
    let result = relu_op(&input).unwrap().data();
    assert!(result[0].is_nan());
    assert_eq!(&result[1..], &[0.0, 2.0]);
}
