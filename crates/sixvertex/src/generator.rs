//! Deterministic Domain-Wall Boundary Condition initial states.
//!
//! Purpose
//! - Build the two frozen ground states (`High`, `Low`) of DWBC-constrained
//!   six-vertex lattices: the standard starting points for arctic-curve
//!   experiments.
//!
//! Design
//! - The vertex-type pattern below is authoritative; edges are always
//!   derived from it via [`crate::lattice::State::build`], never asserted
//!   independently. A nonzero violation count after derivation is a
//!   programmer error in this module and is surfaced as
//!   [`SixVertexError::InvalidInitialState`] rather than silently ignored.
//! - Only `a1`/`a2`/`c1`/`c2` tile a homogeneous region consistently with
//!   themselves: for any of these four, the edge reversed by a same-type
//!   neighbor on either axis flips back to the tag that neighbor already
//!   presents. `b1`/`b2` do not have this property (`left == right` and
//!   `top == bottom` for both, so a same-type neighbor always disagrees)
//!   and can therefore only ever appear as an isolated seam between two
//!   differently-typed regions, never as the fill of a multi-cell block.

use crate::error::{Result, SixVertexError};
use crate::lattice::State;
use crate::vertex::VertexType;

/// Which frozen boundary pattern to start a simulation from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InitialState {
    High,
    Low,
}

/// Build the DWBC-High pattern: `b1` on the anti-diagonal seam, `c1` filling
/// the upper-left triangle, `c2` filling the lower-right triangle.
pub(crate) fn build_high(n: usize) -> (State, usize) {
    let mut vertices = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            let v = match (r + c).cmp(&(n - 1)) {
                std::cmp::Ordering::Equal => VertexType::B1,
                std::cmp::Ordering::Less => VertexType::C1,
                std::cmp::Ordering::Greater => VertexType::C2,
            };
            vertices.push(v);
        }
    }
    State::build(n, vertices)
}

/// Build the DWBC-Low pattern: `b2` on the main-diagonal seam, `a1` filling
/// the upper-right triangle, `a2` filling the lower-left triangle.
pub(crate) fn build_low(n: usize) -> (State, usize) {
    let mut vertices = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            let v = match c.cmp(&r) {
                std::cmp::Ordering::Equal => VertexType::B2,
                std::cmp::Ordering::Greater => VertexType::A1,
                std::cmp::Ordering::Less => VertexType::A2,
            };
            vertices.push(v);
        }
    }
    State::build(n, vertices)
}

/// Build the requested deterministic initial state, validating it has zero
/// ice-rule violations.
pub fn generate(n: usize, variant: InitialState) -> Result<State> {
    if n < 2 {
        return Err(SixVertexError::InvalidSize { size: n });
    }
    let (state, violations) = match variant {
        InitialState::High => build_high(n),
        InitialState::Low => build_low(n),
    };
    if violations != 0 {
        return Err(SixVertexError::InvalidInitialState { violations });
    }
    Ok(state)
}
