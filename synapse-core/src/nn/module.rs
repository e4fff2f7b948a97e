use crate::error::SynapseError;
use crate::nn::Parameter;
use crate::tensor::Tensor;

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// A module performs a forward pass and exposes its learnable parameters as a
/// flat ordered list, which is what optimizers and gradient zeroing consume.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass of the module.
    fn forward(&self, input: &Tensor) -> Result<Tensor, SynapseError>;

    /// Returns all learnable parameters of the module, including those of sub-modules,
    /// in a stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"0.weight"`, `"2.bias"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Returns a vector of direct child `Module`s.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Returns the direct children along with their names.
    fn named_children(&self) -> Vec<(String, &dyn Module)> {
        Vec::new()
    }

    /// Resets the gradient of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{ones, zeros};

    #[derive(Debug)]
    struct MockModule {
        param: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, input: &Tensor) -> Result<Tensor, SynapseError> {
            input.mul(&self.param)
        }

        fn parameters(&self) -> Vec<&Parameter> {
            vec![&self.param]
        }

        fn named_parameters(&self) -> Vec<(String, &Parameter)> {
            let name = self.param.name().unwrap_or("param").to_string();
            vec![(name, &self.param)]
        }
    }

    #[test]
    fn test_module_parameters_retrieval() -> Result<(), SynapseError> {
        let module = MockModule {
            param: Parameter::new_unnamed(ones(&[2])?),
        };
        let out = module.forward(&ones(&[2])?)?;
        assert_eq!(out.data(), vec![1.0, 1.0]);
        let params = module.parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].shape(), vec![2]);
        assert_eq!(module.named_parameters()[0].0, "param");
        assert!(module.children().is_empty());
        Ok(())
    }

    #[test]
    fn test_module_default_zero_grad() -> Result<(), SynapseError> {
        let module = MockModule {
            param: Parameter::new(zeros(&[1])?, Some("w".to_string())),
        };
        let x = ones(&[1])?;
        module.forward(&x)?.sum()?.backward()?;
        assert_eq!(module.param.grad(), vec![1.0]);
        module.zero_grad();
        assert_eq!(module.param.grad(), vec![0.0]);
        Ok(())
    }
}
