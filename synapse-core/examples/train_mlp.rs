//! Fits `Linear(4, 16) -> ReLU -> Linear(16, 2)` to `y = x·A + b`, drawing a
//! fresh batch every epoch.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use synapse_core::model::Sequential;
use synapse_core::nn::{mse_loss, Linear, Module, ReLU};
use synapse_core::optim::{Optimizer, SgdOptimizer};
use synapse_core::{SynapseError, Tensor};

const BATCH: usize = 8;
const IN: usize = 4;
const HIDDEN: usize = 16;
const OUT: usize = 2;
const EPOCHS: usize = 100;
const LR: f64 = 0.05;

fn normal(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.sample::<f64, _>(StandardNormal)).collect()
}

fn main() -> Result<(), SynapseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(42);
    let a = Tensor::new(normal(&mut rng, IN * OUT), vec![IN, OUT])?;
    let b = Tensor::new(normal(&mut rng, OUT), vec![1, OUT])?;

    let model = Sequential::new()
        .with(Box::new(Linear::with_rng(IN, HIDDEN, &mut rng)?))
        .with(Box::new(ReLU::new()))
        .with(Box::new(Linear::with_rng(HIDDEN, OUT, &mut rng)?));
    let mut optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned(), LR)?;

    for epoch in 0..EPOCHS {
        let x = Tensor::new(normal(&mut rng, BATCH * IN), vec![BATCH, IN])?;
        // b is [1, OUT]; replicate it per row since ops do not broadcast.
        let b_rows = Tensor::new(b.data().repeat(BATCH), vec![BATCH, OUT])?;
        let y = x.matmul(&a)?.add(&b_rows)?;

        optimizer.zero_grad();
        let loss = mse_loss(&model.forward(&x)?, &y)?;
        loss.backward()?;
        optimizer.step()?;

        if epoch % 10 == 0 {
            info!("epoch {} loss {:.6}", epoch, loss.item()?);
        }
    }
    Ok(())
}
