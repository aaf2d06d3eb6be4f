//! Print the row-averaged height profile before and after a run, to show
//! the arctic-curve flattening effect.
//!
//! Usage:
//!   cargo run -p sixvertex --example height_profile -- 32 5000

use sixvertex::observables::HeightField;
use sixvertex::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let size: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);
    let steps: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    let weights = Weights::uniform(1.0).expect("uniform weights are always valid");
    let mut sim =
        Simulation::new(size, weights, 7, InitialState::Low).expect("valid construction");

    let before = sim.snapshot_with_height();
    sim.step_batch(steps);
    let after = sim.snapshot_with_height();

    print_profile("before", before.height().expect("requested with height"));
    print_profile("after", after.height().expect("requested with height"));
}

fn print_profile(label: &str, field: &HeightField) {
    let profile = field.row_profile();
    print!("{label}:");
    for value in profile {
        print!(" {value:.2}");
    }
    println!();
}
