//! Runs the stock 4-16-2 network over a two-row payload.

use synapse_core::inference::Predictor;
use synapse_core::SynapseError;

fn main() -> Result<(), SynapseError> {
    env_logger::init();

    let predictor = Predictor::default_mlp()?;
    let input = vec![vec![0.5, 0.2, 0.1, 0.3], vec![0.1, 0.2, 0.3, 0.4]];
    let output = predictor.predict(&input)?;
    for (row_in, row_out) in input.iter().zip(output.iter()) {
        println!("{:?} -> {:?}", row_in, row_out);
    }

    match predictor.predict(&[vec![1.0, 2.0]]) {
        Err(e) => println!("rejected: {}", e),
        Ok(out) => println!("unexpected output {:?}", out),
    }
    Ok(())
}
