//! Run a DWBC-High simulation for a fixed number of steps and print its
//! final statistics.
//!
//! Usage:
//!   cargo run -p sixvertex --example run_simulation -- 24 2000

use sixvertex::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let size: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(24);
    let steps: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2000);

    let weights = Weights::uniform(1.0).expect("uniform weights are always valid");
    let mut sim =
        Simulation::new(size, weights, 1, InitialState::High).expect("valid construction");

    let attempted = sim.step_batch(steps);
    let stats = sim.stats();
    println!("size={size} steps_attempted={attempted}");
    println!("acceptance_rate={:.4}", stats.acceptance_rate());
    for vertex in VertexType::ALL {
        println!("{vertex}: {}", stats.type_counts.get(vertex));
    }
}
