//! `synapse-data`: datasets, index samplers and a batching loader that turns
//! samples into `[batch, features]` tensors for `synapse-core` models.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::{collate_samples, DataLoader, Sample};
pub use datasets::{Dataset, LinearTargetDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
