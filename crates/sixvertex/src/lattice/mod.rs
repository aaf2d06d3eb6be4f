//! Lattice state: the N×N vertex-type array and its boundary-inclusive
//! edge arrays.
//!
//! Purpose
//! - Keep the vertex-type array (source of truth for per-type weights) and
//!   the edge-tag arrays (source of truth for the ice rule and the height
//!   function) consistent at every externally observable state.
//!
//! Why this design
//! - Both arrays are arena-backed flat `Vec`s indexed by `r * stride + c`,
//!   matching the lineage's preference for small, contiguous, explicit
//!   layouts over nested containers.
//! - Edge tags are never set independently of a vertex's canonical
//!   configuration: [`State::build`] derives every edge (interior or
//!   boundary) from the vertex array, so there is exactly one source of
//!   truth and no way for the two arrays to silently diverge.

mod state;

pub use state::State;
