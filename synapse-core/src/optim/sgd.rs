use crate::error::SynapseError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::debug;

/// Plain stochastic gradient descent: `param -= lr * grad` for every element.
///
/// No momentum and no weight decay.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over shared handles of `params`.
    ///
    /// # Errors
    /// `InvalidArgument` if `lr` is not finite and strictly positive.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Result<Self, SynapseError> {
        validate_lr(lr)?;
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), SynapseError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

fn validate_lr(lr: f64) -> Result<(), SynapseError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(SynapseError::InvalidArgument(format!(
            "Invalid learning rate: {}",
            lr
        )));
    }
    Ok(())
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), SynapseError> {
        debug!("SGD step over {} parameters (lr={})", self.params.len(), self.lr);
        for param in &self.params {
            let mut guard = param.write_data();
            if !guard.requires_grad {
                continue;
            }
            if !guard.is_leaf() {
                return Err(SynapseError::InvalidArgument(
                    "SGD cannot update a tensor produced by an op".to_string(),
                ));
            }
            let tensor_data = &mut *guard;
            for (v, g) in tensor_data.data.iter_mut().zip(tensor_data.grad.iter()) {
                *v -= self.lr * g;
            }
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        debug!("SGD zero_grad over {} parameters", self.params.len());
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
