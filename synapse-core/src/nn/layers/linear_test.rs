use super::*;
use crate::utils::testing::{check_tensor_near, create_test_tensor};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_linear_creation() {
    let layer = Linear::new(4, 16).unwrap();
    assert_eq!(layer.weight().shape(), vec![16, 4]);
    assert_eq!(layer.bias().shape(), vec![1, 16]);
    assert_eq!(layer.bias().data(), vec![0.0; 16]);
    assert!(layer.weight().requires_grad());
    assert!(layer.bias().requires_grad());
    assert_eq!((layer.in_features(), layer.out_features()), (4, 16));
}

#[test]
fn test_linear_with_rng_reproducible() {
    let a = Linear::with_rng(3, 2, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = Linear::with_rng(3, 2, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.weight().data(), b.weight().data());
}

#[test]
fn test_linear_forward_from_tensors() {
    let w = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let b = create_test_tensor(vec![0.5, -0.5], vec![1, 2]);
    let layer = Linear::from_tensors(w, b).unwrap();
    let x = create_test_tensor(vec![1.0, 1.0, 0.0, 2.0], vec![2, 2]);
    let y = layer.forward(&x).unwrap();
    check_tensor_near(&y, &[2, 2], &[3.5, 6.5, 4.5, 7.5], 1e-12);
    assert!(y.requires_grad());
}

#[test]
fn test_linear_from_tensors_bad_bias() {
    let w = create_test_tensor(vec![1.0; 6], vec![3, 2]);
    let b = create_test_tensor(vec![0.0; 2], vec![1, 2]);
    assert!(matches!(
        Linear::from_tensors(w, b),
        Err(SynapseError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_linear_input_feature_mismatch() {
    let layer = Linear::new(4, 2).unwrap();
    let x = create_test_tensor(vec![1.0; 6], vec![2, 3]);
    assert!(matches!(
        layer.forward(&x),
        Err(SynapseError::DimensionMismatch { expected: 4, actual: 3, .. })
    ));
}

#[test]
fn test_linear_backward_populates_parameter_grads() {
    let layer = Linear::with_rng(2, 3, &mut StdRng::seed_from_u64(1)).unwrap();
    let x = create_test_tensor(vec![1.0, 2.0, -1.0, 0.5], vec![2, 2]);
    layer.forward(&x).unwrap().sum().unwrap().backward().unwrap();
    // d sum / d bias[j] = batch size
    assert_eq!(layer.bias().grad(), vec![2.0, 2.0, 2.0]);
    // d sum / d W[j,i] = Σ_b x[b,i]
    assert_eq!(layer.weight().grad(), vec![0.0, 2.5, 0.0, 2.5, 0.0, 2.5]);
    assert_eq!(layer.named_parameters()[0].0, "weight");
}
