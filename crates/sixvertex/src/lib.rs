//! Six-vertex (square-ice) Monte Carlo lattice simulator.
//!
//! Purpose
//! - Sample configurations of the two-dimensional six-vertex model under
//!   Domain-Wall Boundary Conditions (DWBC) via local plaquette flips and a
//!   heat-bath acceptance rule, and expose the observables needed to study
//!   the arctic-curve / limit-shape phenomenon.
//!
//! Why this design
//! - The lattice keeps both the vertex-type array and the edge-tag arrays
//!   materialized so that type-dependent weights and the ice-rule/height
//!   bookkeeping both stay O(1) to read, at the cost of keeping them in sync
//!   on every flip (`lattice::State::apply_flip` is the sole mutation path).
//! - The flippable-site index trades a small memory overhead (a reverse
//!   `HashMap`) for O(1) amortized insert/remove, since uniform sampling
//!   over "all currently flippable plaquettes" is the hot operation.
//! - The flip-pattern catalog is derived once behind a `OnceLock` rather
//!   than hand-transcribed, so its correctness rests on the enumeration
//!   predicate in `flip::catalog` instead of a literal table.
//!
//! Assumptions and conventions
//! - Rows grow downward, columns grow rightward; `(row, col)` addressing
//!   throughout, arena-backed in row-major flat buffers.
//! - This crate never spawns threads and never reads the environment;
//!   callers that want background execution build it around [`Simulation`].

pub mod error;
pub mod flip;
pub mod generator;
pub mod lattice;
pub mod observables;
pub mod rng;
pub mod sampler;
pub mod simulation;
pub mod snapshot;
pub mod vertex;

#[cfg(test)]
mod proptests;

pub use error::{Result, SixVertexError};
pub use generator::InitialState;
pub use observables::{Stats, TypeCounts};
pub use sampler::{StepOutcome, Weights};
pub use simulation::Simulation;
pub use snapshot::Snapshot;
pub use vertex::VertexType;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports for quick use by callers.
pub mod prelude {
    pub use crate::error::{Result, SixVertexError};
    pub use crate::generator::InitialState;
    pub use crate::observables::{Stats, TypeCounts};
    pub use crate::sampler::{StepOutcome, Weights};
    pub use crate::simulation::Simulation;
    pub use crate::snapshot::Snapshot;
    pub use crate::vertex::VertexType;
}
