use super::*;
use crate::nn::{Linear, Module};
use crate::tensor::Tensor;
use crate::utils::testing::create_test_tensor;
use approx::assert_relative_eq;

fn param(data: Vec<f64>, shape: Vec<usize>) -> Parameter {
    Parameter::new_unnamed(Tensor::new(data, shape).unwrap())
}

#[test]
fn test_sgd_basic_step() -> Result<(), SynapseError> {
    let p = param(vec![1.0, 2.0, 3.0], vec![3]);
    p.mul(&p)?.sum()?.backward()?;
    // grad = 2p
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1)?;
    optimizer.step()?;
    let expected = [0.8, 1.6, 2.4];
    for (v, e) in p.data().iter().zip(expected.iter()) {
        assert_relative_eq!(*v, *e, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), SynapseError> {
    let p = param(vec![1.0, -1.0], vec![2]);
    p.sum()?.backward()?;
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.5)?;
    optimizer.zero_grad();
    assert_eq!(p.grad(), vec![0.0, 0.0]);
    optimizer.step()?;
    assert_eq!(p.data(), vec![1.0, -1.0]);
    Ok(())
}

#[test]
fn test_sgd_invalid_lr() {
    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            SgdOptimizer::new(Vec::new(), lr),
            Err(SynapseError::InvalidArgument(_))
        ));
    }
    let mut optimizer = SgdOptimizer::new(Vec::new(), 0.1).unwrap();
    assert!(optimizer.set_lr(-1.0).is_err());
    optimizer.set_lr(0.01).unwrap();
    assert_relative_eq!(optimizer.lr(), 0.01);
}

#[test]
fn test_sgd_updates_model_parameters() -> Result<(), SynapseError> {
    let layer = Linear::new(2, 1)?;
    let before = layer.bias().data()[0];
    let x = create_test_tensor(vec![1.0, 2.0], vec![1, 2]);
    layer.forward(&x)?.sum()?.backward()?;
    let mut optimizer = SgdOptimizer::new(layer.parameters().into_iter().cloned(), 0.05)?;
    assert_eq!(optimizer.params().len(), 2);
    optimizer.step()?;
    assert_relative_eq!(layer.bias().data()[0], before - 0.05, epsilon = 1e-12);
    Ok(())
}
