//! Observables: vertex-type counts, acceptance statistics, and the
//! height-function reconstruction with its derived summary statistics.
//!
//! Height-function convention
//! - The field lives on the `(N+1) x (N+1)` dual points of the lattice.
//! - A *vertical* dual step (row `i` to `i+1`, same column `j`) crosses
//!   the lattice's horizontal edge `h_edges[i][j]`: `+1` if that edge is
//!   `In`, else `-1`.
//! - A *horizontal* dual step (column `j` to `j+1`, same row `i`) crosses
//!   the lattice's vertical edge `v_edges[i][j]`: `+1` if that edge is
//!   `Out`, else `-1`.
//! - These are the two edges of the dual grid rotated 90° from the edges
//!   they cross, the usual primal/dual relationship; the ice rule at
//!   every vertex makes the sum of the four signed steps around that
//!   vertex's own four edges cancel to zero, which is exactly why the
//!   reconstruction is path-independent (well-defined).

use crate::lattice::State;
use crate::vertex::{Edge, VertexType};

/// Per-type occupancy counts over a lattice's vertices.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TypeCounts {
    counts: [u64; 6],
}

impl TypeCounts {
    #[must_use]
    pub fn from_vertices(vertices: &[VertexType]) -> TypeCounts {
        let mut counts = [0u64; 6];
        for &v in vertices {
            counts[v.code() as usize] += 1;
        }
        TypeCounts { counts }
    }

    #[must_use]
    pub fn get(&self, vertex: VertexType) -> u64 {
        self.counts[vertex.code() as usize]
    }

    pub(crate) fn apply_corner_change(&mut self, before: VertexType, after: VertexType) {
        if before == after {
            return;
        }
        self.counts[before.code() as usize] -= 1;
        self.counts[after.code() as usize] += 1;
    }
}

/// Cumulative run statistics since the last [`crate::Simulation::reset_stats`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub attempts: u64,
    pub successful_flips: u64,
    pub flippable_count: usize,
    pub type_counts: TypeCounts,
}

impl Stats {
    #[must_use]
    pub fn new(flippable_count: usize, type_counts: TypeCounts) -> Stats {
        Stats {
            attempts: 0,
            successful_flips: 0,
            flippable_count,
            type_counts,
        }
    }

    /// `successful_flips / attempts`, or `0.0` before any attempts.
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.successful_flips as f64 / self.attempts as f64
        }
    }
}

/// The reconstructed height field and its per-edge gradient signs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightField {
    n: usize,
    values: Vec<i64>,
    /// Vertical-step signs, shape `n * (n + 1)` (same layout as `h_edges`).
    vertical_signs: Vec<i8>,
    /// Horizontal-step signs, shape `(n + 1) * n` (same layout as `v_edges`).
    horizontal_signs: Vec<i8>,
}

impl HeightField {
    /// Reconstruct the height field for `state`.
    #[must_use]
    pub fn reconstruct(state: &State) -> HeightField {
        let n = state.n();
        let stride = n + 1;
        let mut values = vec![0i64; stride * stride];
        let mut vertical_signs = vec![0i8; n * stride];
        let mut horizontal_signs = vec![0i8; stride * n];

        for i in 0..n {
            let sign = vertical_sign(state.h_edge(i, 0));
            vertical_signs[i * stride] = sign;
            values[(i + 1) * stride] = values[i * stride] + i64::from(sign);
        }

        for i in 0..=n {
            for j in 0..n {
                let sign = horizontal_sign(state.v_edge(i, j));
                horizontal_signs[i * n + j] = sign;
                values[i * stride + (j + 1)] = values[i * stride + j] + i64::from(sign);
            }
        }
        // Fill the remaining vertical-step signs (columns 1..n) for the
        // gradient-field accessor; they are not needed by reconstruction
        // itself since well-definedness makes any path agree, but callers
        // may want every edge's sign without re-deriving it.
        for i in 0..n {
            for j in 1..stride {
                vertical_signs[i * stride + j] = vertical_sign(state.h_edge(i, j));
            }
        }

        HeightField {
            n,
            values,
            vertical_signs,
            horizontal_signs,
        }
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.values[i * (self.n + 1) + j]
    }

    #[must_use]
    pub fn volume(&self) -> i64 {
        self.values.iter().sum()
    }

    #[must_use]
    pub fn min(&self) -> i64 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    #[must_use]
    pub fn max(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<i64>() as f64 / self.values.len() as f64
    }

    /// Average height along each dual row, length `n + 1`.
    #[must_use]
    pub fn row_profile(&self) -> Vec<f64> {
        let stride = self.n + 1;
        (0..stride)
            .map(|i| {
                let row = &self.values[i * stride..(i + 1) * stride];
                row.iter().sum::<i64>() as f64 / stride as f64
            })
            .collect()
    }

    /// Average height along each dual column, length `n + 1`.
    #[must_use]
    pub fn col_profile(&self) -> Vec<f64> {
        let stride = self.n + 1;
        (0..stride)
            .map(|j| {
                let sum: i64 = (0..stride).map(|i| self.values[i * stride + j]).sum();
                sum as f64 / stride as f64
            })
            .collect()
    }

    /// Sign of the vertical dual step at `(i, j)` (`h_edges` layout).
    #[must_use]
    pub fn vertical_gradient(&self, i: usize, j: usize) -> i8 {
        self.vertical_signs[i * (self.n + 1) + j]
    }

    /// Sign of the horizontal dual step at `(i, j)` (`v_edges` layout).
    #[must_use]
    pub fn horizontal_gradient(&self, i: usize, j: usize) -> i8 {
        self.horizontal_signs[i * self.n + j]
    }
}

fn vertical_sign(edge: Edge) -> i8 {
    if matches!(edge, Edge::In) {
        1
    } else {
        -1
    }
}

fn horizontal_sign(edge: Edge) -> i8 {
    if matches!(edge, Edge::Out) {
        1
    } else {
        -1
    }
}
