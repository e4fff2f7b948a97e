// synapse-data/src/dataloader.rs

//! # DataLoader
//!
//! Groups sampled dataset indices into batches and collates `(features, target)`
//! samples into `[batch, in]` / `[batch, out]` tensors.
//!
//! ```rust
//! use synapse_data::{DataLoader, LinearTargetDataset, SequentialSampler};
//!
//! let dataset = LinearTargetDataset::new(10, 4, 2, 42).unwrap();
//! let loader = DataLoader::new(dataset, 4, SequentialSampler::new(), false).unwrap();
//! for batch in loader.tensor_batches() {
//!     let (x, y) = batch.unwrap();
//!     assert_eq!(x.shape()[1], 4);
//!     assert_eq!(y.shape()[1], 2);
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use synapse_core::{SynapseError, Tensor};

/// One supervised example: feature row and target row.
pub type Sample = (Vec<f64>, Vec<f64>);

/// Batching loader over a dataset.
///
/// Each call to [`iter`](DataLoader::iter) or
/// [`tensor_batches`](DataLoader::tensor_batches) is one pass (epoch) and asks
/// the sampler for a fresh index order.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    /// If true, a trailing incomplete batch is skipped.
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// # Errors
    /// `InvalidArgument` if `batch_size` is zero.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, SynapseError> {
        if batch_size == 0 {
            return Err(SynapseError::InvalidArgument(
                "DataLoader batch_size must be positive".to_string(),
            ));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one pass yields.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    /// Starts a pass yielding raw item batches.
    pub fn iter(&self) -> Batches<'_, D> {
        Batches {
            dataset: &self.dataset,
            indices: self.sampler.iter(self.dataset.len()),
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

impl<D: Dataset<Item = Sample>, S: Sampler> DataLoader<D, S> {
    /// Starts a pass yielding `(x [batch, in], y [batch, out])` tensors.
    pub fn tensor_batches(&self) -> impl Iterator<Item = Result<(Tensor, Tensor), SynapseError>> + '_ {
        self.iter().map(|batch| batch.and_then(collate_samples))
    }
}

/// One pass over a dataset, in sampler order.
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Result<Vec<D::Item>, SynapseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

/// Stacks samples row-wise into a feature tensor and a target tensor.
///
/// # Errors
/// * `EmptyInput` if `samples` is empty.
/// * `ShapeMismatch` if feature or target rows differ in width.
pub fn collate_samples(samples: Vec<Sample>) -> Result<(Tensor, Tensor), SynapseError> {
    let (first_x, first_y) = samples
        .first()
        .ok_or_else(|| SynapseError::EmptyInput("cannot collate an empty batch".to_string()))?;
    let (in_features, out_features) = (first_x.len(), first_y.len());
    let batch = samples.len();

    let mut xs = Vec::with_capacity(batch * in_features);
    let mut ys = Vec::with_capacity(batch * out_features);
    for (x, y) in samples {
        if x.len() != in_features || y.len() != out_features {
            return Err(SynapseError::ShapeMismatch {
                expected: vec![in_features, out_features],
                actual: vec![x.len(), y.len()],
                operation: "collate_samples".to_string(),
            });
        }
        xs.extend(x);
        ys.extend(y);
    }

    Ok((
        Tensor::new(xs, vec![batch, in_features])?,
        Tensor::new(ys, vec![batch, out_features])?,
    ))
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
