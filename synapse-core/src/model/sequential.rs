use crate::error::SynapseError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// An ordered container: `forward` feeds each child's output into the next.
///
/// Children are named by their insertion index unless added with
/// [`add_module`](Sequential::add_module), so parameter names read
/// `"0.weight"`, `"0.bias"`, `"2.weight"`, ...
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    /// Appends a child named after its position.
    pub fn push(&mut self, module: Box<dyn Module>) {
        let name = self.modules.len().to_string();
        self.modules.push((name, module));
    }

    /// Builder-style [`push`](Sequential::push).
    pub fn with(mut self, module: Box<dyn Module>) -> Self {
        self.push(module);
        self
    }

    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        self.modules.push((name.to_string(), module));
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Module for Sequential {
    fn forward(&self, input: &Tensor) -> Result<Tensor, SynapseError> {
        let mut current_input = input.clone();
        for (_, module) in &self.modules {
            current_input = module.forward(&current_input)?;
        }
        Ok(current_input)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.modules
            .iter()
            .flat_map(|(_, module)| module.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.modules.iter().map(|(_, m)| m.as_ref()).collect()
    }

    fn named_children(&self) -> Vec<(String, &dyn Module)> {
        self.modules
            .iter()
            .map(|(name, m)| (name.clone(), m.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::{Linear, ReLU};
    use crate::tensor::ones;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mlp() -> Sequential {
        let mut rng = StdRng::seed_from_u64(3);
        Sequential::new()
            .with(Box::new(Linear::with_rng(4, 8, &mut rng).unwrap()))
            .with(Box::new(ReLU::new()))
            .with(Box::new(Linear::with_rng(8, 2, &mut rng).unwrap()))
    }

    #[test]
    fn test_sequential_forward_shape() {
        let model = mlp();
        let out = model.forward(&ones(&[5, 4]).unwrap()).unwrap();
        assert_eq!(out.shape(), vec![5, 2]);
        assert!(out.requires_grad());
    }

    #[test]
    fn test_sequential_parameter_order_and_names() {
        let model = mlp();
        assert_eq!(model.len(), 3);
        assert_eq!(model.parameters().len(), 4);
        let names: Vec<String> = model.named_parameters().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["0.weight", "0.bias", "2.weight", "2.bias"]);
        assert_eq!(model.parameters()[2].shape(), vec![2, 8]);
        assert_eq!(model.children().len(), 3);
    }

    #[test]
    fn test_sequential_custom_names() {
        let mut model = Sequential::new();
        model.add_module("fc", Box::new(Linear::new(2, 2).unwrap()));
        let names: Vec<String> = model.named_parameters().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["fc.weight", "fc.bias"]);
        assert_eq!(model.named_children()[0].0, "fc");
    }

    #[test]
    fn test_sequential_empty_is_identity() {
        let model = Sequential::new();
        assert!(model.is_empty());
        let x = ones(&[1, 3]).unwrap();
        let y = model.forward(&x).unwrap();
        assert_eq!(y.node_id(), x.node_id());
    }
}
