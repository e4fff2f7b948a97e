// src/nn/mod.rs
// Layers, containers and losses built on top of the differentiable ops.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

// Re-export common items
pub use layers::{Linear, ReLU};
pub use losses::{mse_loss, MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
