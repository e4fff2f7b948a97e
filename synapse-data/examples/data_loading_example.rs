//! Trains a small MLP on a synthetic linear-target dataset, reshuffled every epoch.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use synapse_core::model::Sequential;
use synapse_core::nn::{mse_loss, Linear, Module, ReLU};
use synapse_core::optim::{Optimizer, SgdOptimizer};
use synapse_core::SynapseError;
use synapse_data::{DataLoader, LinearTargetDataset, RandomSampler};

fn main() -> Result<(), SynapseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = LinearTargetDataset::new(256, 4, 2, 42)?;
    let loader = DataLoader::new(dataset, 8, RandomSampler::seeded(42), true)?;

    let mut rng = StdRng::seed_from_u64(42);
    let model = Sequential::new()
        .with(Box::new(Linear::with_rng(4, 16, &mut rng)?))
        .with(Box::new(ReLU::new()))
        .with(Box::new(Linear::with_rng(16, 2, &mut rng)?));
    let mut optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned(), 0.05)?;

    for epoch in 0..20 {
        let mut total = 0.0;
        let mut batches = 0;
        for batch in loader.tensor_batches() {
            let (x, y) = batch?;
            optimizer.zero_grad();
            let loss = mse_loss(&model.forward(&x)?, &y)?;
            total += loss.item()?;
            batches += 1;
            loss.backward()?;
            optimizer.step()?;
        }
        info!("epoch {:>2}: mean loss {:.6}", epoch, total / batches as f64);
    }
    Ok(())
}
