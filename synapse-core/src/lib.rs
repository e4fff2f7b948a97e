//! `synapse-core`: a small reverse-mode automatic differentiation engine over
//! dense `f64` tensors, with the layers, loss, optimizer and inference wrapper
//! needed to train and serve a multi-layer perceptron.
//!
//! ```
//! use synapse_core::Tensor;
//!
//! let x = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap().set_requires_grad(true);
//! let loss = x.mul(&x).unwrap().sum().unwrap();
//! loss.backward().unwrap();
//! assert_eq!(x.grad(), vec![2.0, 4.0, 6.0]);
//! ```

pub mod autograd;
pub mod error;
pub mod inference;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

// Re-export the core types so they are reachable as `synapse_core::Tensor`.
pub use error::SynapseError;
pub use tensor::Tensor;
