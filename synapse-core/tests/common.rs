use synapse_core::tensor::Tensor;

pub fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Failed to create test tensor in common helper")
}

#[allow(dead_code)]
pub fn leaf(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    create_test_tensor(data, shape).set_requires_grad(true)
}
