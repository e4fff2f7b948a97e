// src/tensor/debug.rs
use crate::tensor::Tensor;
use std::fmt;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => write!(
                f,
                "Tensor(shape={:?}, data={:?}, requires_grad={}, has_grad_fn={})",
                guard.shape,
                guard.data,
                guard.requires_grad,
                guard.grad_fn.is_some()
            ),
            Err(_) => write!(f, "Tensor(Error: RwLock poisoned)"),
        }
    }
}

impl fmt::Display for Tensor {
    /// Row-per-line rendering for rank-2 tensors, flat otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = match self.data.read() {
            Ok(guard) => guard,
            Err(_) => return write!(f, "Tensor(<poisoned>)"),
        };
        if guard.shape.len() == 2 {
            let cols = guard.shape[1];
            writeln!(f, "Tensor(shape={:?}) [", guard.shape)?;
            for row in guard.data.chunks(cols) {
                writeln!(f, "  {:?},", row)?;
            }
            write!(f, "]")
        } else {
            write!(f, "Tensor(shape={:?}, data={:?})", guard.shape, guard.data)
        }
    }
}
