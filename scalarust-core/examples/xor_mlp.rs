//! # Training a small MLP on XOR
//!
//! Demonstrates the full training loop on top of `scalarust-core`:
//! 1.  A `Sequential` model of two `Linear` layers (tanh hidden, sigmoid output).
//! 2.  A per-epoch loss graph built with `mse_loss` over the four XOR samples.
//! 3.  `backward` on the loss, an `AdamOptimizer` step, then `zero_grad`.
//!
//! ## Running
//! `cargo run --example xor_mlp`

use scalarust_core::linalg::Vector;
use scalarust_core::model::Sequential;
use scalarust_core::nn::{mse_loss, Activation, Linear, Module};
use scalarust_core::optim::{AdamOptimizer, Optimizer};
use scalarust_core::{Node, ScalarustError};

const EPOCHS: usize = 500;
const LEARNING_RATE: f64 = 0.05;

const SAMPLES: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

fn build_model() -> Result<Sequential, ScalarustError> {
    Ok(Sequential::new()
        .with(Linear::with_seed(2, 4, true, Some(Activation::Tanh), 7)?)
        .with(Linear::with_seed(4, 1, true, Some(Activation::Sigmoid), 11)?))
}

/// Mean squared error over all samples, as a single graph.
fn dataset_loss(model: &Sequential) -> Result<Node, ScalarustError> {
    let mut predictions = Vec::with_capacity(SAMPLES.len());
    let mut targets = Vec::with_capacity(SAMPLES.len());
    for (input, target) in SAMPLES.iter() {
        let out = model.forward(&Vector::from_values(input)?)?;
        predictions.push(out[0].clone());
        targets.push(Node::new(*target));
    }
    mse_loss(&Vector::new(predictions)?, &Vector::new(targets)?)
}

fn main() -> Result<(), ScalarustError> {
    let model = build_model()?;
    let params = model.parameters();
    println!("XOR MLP with {} trainable scalars", params.num_leaves());

    let mut optimizer = AdamOptimizer::new(params, LEARNING_RATE, 0.9, 0.999, 1e-8)?;

    for epoch in 0..EPOCHS {
        let loss = dataset_loss(&model)?;
        loss.backward()?;
        optimizer.step()?;
        optimizer.zero_grad();

        if epoch % 50 == 0 || epoch == EPOCHS - 1 {
            println!("epoch {:>4}  loss {:.6}", epoch, loss.value());
        }
    }

    println!("\nPredictions:");
    for (input, target) in SAMPLES.iter() {
        let out = model.forward(&Vector::from_values(input)?)?;
        println!(
            "  {:?} -> {:.4} (target {})",
            input,
            out[0].value(),
            target
        );
    }
    Ok(())
}
