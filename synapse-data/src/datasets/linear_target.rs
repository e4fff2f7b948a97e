// synapse-data/src/datasets/linear_target.rs

use super::traits::Dataset;
use crate::dataloader::Sample;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use synapse_core::SynapseError;

/// Synthetic regression data with an exactly linear ground truth.
///
/// A hidden `coefficients [in, out]` matrix and `intercept [out]` vector are drawn
/// from a standard normal, then every sample is `x ~ N(0, 1)^in` paired with
/// `y = x · coefficients + intercept`. Everything derives from `seed`, so two
/// datasets built with the same arguments are identical.
#[derive(Debug, Clone)]
pub struct LinearTargetDataset {
    inputs: Vec<f64>,
    targets: Vec<f64>,
    coefficients: Vec<f64>,
    intercept: Vec<f64>,
    in_features: usize,
    out_features: usize,
}

impl LinearTargetDataset {
    /// # Errors
    /// `InvalidArgument` if any size is zero.
    pub fn new(
        num_samples: usize,
        in_features: usize,
        out_features: usize,
        seed: u64,
    ) -> Result<Self, SynapseError> {
        if num_samples == 0 || in_features == 0 || out_features == 0 {
            return Err(SynapseError::InvalidArgument(format!(
                "LinearTargetDataset needs positive sizes, got samples={} in={} out={}",
                num_samples, in_features, out_features
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let coefficients = draw_normal(&mut rng, in_features * out_features);
        let intercept = draw_normal(&mut rng, out_features);
        let inputs = draw_normal(&mut rng, num_samples * in_features);

        let mut targets = Vec::with_capacity(num_samples * out_features);
        for x in inputs.chunks(in_features) {
            for j in 0..out_features {
                let dot: f64 = x
                    .iter()
                    .enumerate()
                    .map(|(i, xi)| xi * coefficients[i * out_features + j])
                    .sum();
                targets.push(dot + intercept[j]);
            }
        }
        debug!(
            "LinearTargetDataset: {} samples, {} -> {} features (seed {})",
            num_samples, in_features, out_features, seed
        );

        Ok(LinearTargetDataset {
            inputs,
            targets,
            coefficients,
            intercept,
            in_features,
            out_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// Ground-truth coefficients, row-major `[in, out]`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> &[f64] {
        &self.intercept
    }
}

fn draw_normal(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.sample::<f64, _>(StandardNormal)).collect()
}

impl Dataset for LinearTargetDataset {
    type Item = Sample;

    fn get(&self, index: usize) -> Result<Self::Item, SynapseError> {
        if index >= self.len() {
            return Err(SynapseError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.len()],
            });
        }
        let x = &self.inputs[index * self.in_features..(index + 1) * self.in_features];
        let y = &self.targets[index * self.out_features..(index + 1) * self.out_features];
        Ok((x.to_vec(), y.to_vec()))
    }

    fn len(&self) -> usize {
        self.inputs.len() / self.in_features
    }
}

#[cfg(test)]
#[path = "linear_target_test.rs"]
mod tests;
