use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{create_test_tensor, create_test_tensor_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_mse_loss_mean() {
    let input = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let target = create_test_tensor(vec![1.5, 2.0, 2.0, 6.0], vec![2, 2]);
    // (0.25 + 0 + 1 + 4) / 4
    assert_relative_eq!(mse_loss(&input, &target).unwrap().item().unwrap(), 1.3125);
}

#[test]
fn test_mse_loss_sum() {
    let input = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![4]);
    let target = create_test_tensor(vec![1.5, 2.0, 2.0, 6.0], vec![4]);
    let loss = MSELoss::new(Reduction::Sum).calculate(&input, &target).unwrap();
    assert_relative_eq!(loss.item().unwrap(), 5.25);
}

#[test]
fn test_mse_loss_shape_mismatch() {
    let input = create_test_tensor(vec![1.0; 4], vec![2, 2]);
    let target = create_test_tensor(vec![1.0; 4], vec![4]);
    assert!(matches!(
        mse_loss(&input, &target),
        Err(SynapseError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_mse_loss_backward() {
    let input = create_test_tensor_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let target = create_test_tensor(vec![1.5, 2.0, 2.0, 6.0], vec![2, 2]);
    mse_loss(&input, &target).unwrap().backward().unwrap();
    // 2 * (input - target) / n
    let expected = [-0.25, 0.0, 0.5, -1.0];
    for (g, e) in input.grad().iter().zip(expected.iter()) {
        assert_relative_eq!(*g, *e);
    }
    assert_eq!(target.grad(), vec![0.0; 4]);
}

#[test]
fn test_mse_loss_grad_check_both_sides() {
    let input = create_test_tensor_with_grad(vec![0.3, -1.2, 2.0], vec![1, 3]);
    let target = create_test_tensor_with_grad(vec![1.0, 0.5, -0.7], vec![1, 3]);
    let output_grad = create_test_tensor(vec![1.0], vec![1]);
    let loss = MSELoss::new(Reduction::Sum);
    check_grad(
        |inputs| loss.calculate(&inputs[0], &inputs[1]),
        &[input, target],
        &output_grad,
        1e-6,
        1e-4,
    )
    .unwrap();
}

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(SynapseError::InvalidArgument(_))
    ));
}
