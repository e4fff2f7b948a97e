use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{create_test_tensor, create_test_tensor_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_mean_all() {
    let t = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![3, 2]);
    let result = mean_op(&t).unwrap();
    assert_eq!(result.shape(), vec![1]);
    assert_relative_eq!(result.item().unwrap(), 3.5);
}

#[test]
fn test_mean_single_element() {
    let t = create_test_tensor(vec![-7.25], vec![1, 1]);
    assert_relative_eq!(mean_op(&t).unwrap().item().unwrap(), -7.25);
}

#[test]
fn test_mean_backward_scales_by_count() {
    let t = create_test_tensor_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![4]);
    let result = mean_op(&t).unwrap();
    assert_eq!(result.grad_fn().unwrap().name(), "MeanBackward");
    result.backward().unwrap();
    for g in t.grad() {
        assert_relative_eq!(g, 0.25);
    }
}

#[test]
fn test_mean_backward_grad_check() {
    let t = create_test_tensor_with_grad(vec![0.1, -2.0, 3.3, 0.7, 1.9, -0.4], vec![2, 3]);
    let output_grad = create_test_tensor(vec![-1.5], vec![1]);
    check_grad(|inputs| mean_op(&inputs[0]), &[t], &output_grad, 1e-6, 1e-4).unwrap();
}
