//! In-place parameter initialization.
//!
//! The fillers only accept leaf tensors: rewriting the data of a tensor that
//! was produced by an op would invalidate its graph.

use crate::error::SynapseError;
use crate::tensor::Tensor;
use rand::Rng;
use rand_distr::StandardNormal;

/// Fills `tensor` with `N(0, 1) * sqrt(2 / fan_in)` (Kaiming/He normal).
///
/// `fan_in` is the second dimension of a rank-2 tensor (`[out, in]` weights)
/// and the only dimension of a rank-1 tensor.
pub fn kaiming_normal_<R: Rng + ?Sized>(tensor: &Tensor, rng: &mut R) -> Result<(), SynapseError> {
    let shape = tensor.shape();
    let fan_in = match shape.as_slice() {
        [n] => *n,
        [_, fan_in] => *fan_in,
        _ => {
            return Err(SynapseError::RankMismatch {
                expected: 2,
                actual: shape.len(),
                operation: "kaiming_normal_".to_string(),
            })
        }
    };
    let std = (2.0 / fan_in as f64).sqrt();
    fill_with(tensor, "kaiming_normal_", |_| rng.sample::<f64, _>(StandardNormal) * std)
}

/// Fills `tensor` with zeros.
pub fn zeros_(tensor: &Tensor) -> Result<(), SynapseError> {
    fill_with(tensor, "zeros_", |_| 0.0)
}

/// Fills `tensor` with `value`.
pub fn constant_(tensor: &Tensor, value: f64) -> Result<(), SynapseError> {
    fill_with(tensor, "constant_", |_| value)
}

fn fill_with<F>(tensor: &Tensor, operation: &str, mut f: F) -> Result<(), SynapseError>
where
    F: FnMut(usize) -> f64,
{
    let mut guard = tensor.write_data();
    if !guard.is_leaf() {
        return Err(SynapseError::InvalidArgument(format!(
            "{} can only fill leaf tensors",
            operation
        )));
    }
    for (i, v) in guard.data.iter_mut().enumerate() {
        *v = f(i);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{ones, zeros};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zeros_and_constant() {
        let t = ones(&[2, 3]).unwrap();
        zeros_(&t).unwrap();
        assert_eq!(t.data(), vec![0.0; 6]);
        constant_(&t, 0.5).unwrap();
        assert_eq!(t.data(), vec![0.5; 6]);
    }

    #[test]
    fn test_kaiming_normal_statistics() {
        let t = zeros(&[200, 50]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        kaiming_normal_(&t, &mut rng).unwrap();
        let data = t.data();
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let var = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        // Expected variance 2 / 50 = 0.04
        assert!(mean.abs() < 0.01, "mean {}", mean);
        assert!((var - 0.04).abs() < 0.004, "var {}", var);
    }

    #[test]
    fn test_fill_rejects_non_leaf() {
        let a = ones(&[2]).unwrap().set_requires_grad(true);
        let b = a.add(&a).unwrap();
        assert!(matches!(zeros_(&b), Err(SynapseError::InvalidArgument(_))));

        b.sum().unwrap().backward().unwrap();
        assert!(b.grad_fn().is_none());
        assert!(matches!(zeros_(&b), Err(SynapseError::InvalidArgument(_))));
    }

    #[test]
    fn test_kaiming_rejects_rank_three() {
        let t = Tensor::new(vec![0.0; 8], vec![2, 2, 2]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            kaiming_normal_(&t, &mut rng),
            Err(SynapseError::RankMismatch { .. })
        ));
    }
}
