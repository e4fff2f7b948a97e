pub mod linear_target;
pub mod traits;

pub use linear_target::LinearTargetDataset;
pub use traits::Dataset;
