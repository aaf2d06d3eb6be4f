//! The immutable snapshot view and its persisted-state byte format.
//!
//! A snapshot is an owned copy of the vertex array and statistics — the
//! simplest safe option for a single-writer engine with no internal
//! locking. There is no read-lease variant.

use crate::error::{Result, SixVertexError};
use crate::observables::{HeightField, Stats};
use crate::sampler::Weights;
use crate::vertex::VertexType;

const MAGIC: &[u8; 4] = b"SIXV";
const VERSION: u16 = 1;

/// An owned, point-in-time view of a simulation.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub n: usize,
    pub weights: Weights,
    pub seed: u64,
    pub attempts: u64,
    pub vertices: Vec<VertexType>,
    pub stats: Stats,
    height: Option<HeightField>,
}

impl Snapshot {
    pub(crate) fn new(
        n: usize,
        weights: Weights,
        seed: u64,
        attempts: u64,
        vertices: Vec<VertexType>,
        stats: Stats,
        height: Option<HeightField>,
    ) -> Snapshot {
        Snapshot {
            n,
            weights,
            seed,
            attempts,
            vertices,
            stats,
            height,
        }
    }

    /// The height field, if this snapshot was taken via
    /// `Simulation::snapshot_with_height`.
    #[must_use]
    pub fn height(&self) -> Option<&HeightField> {
        self.height.as_ref()
    }

    /// Encode the fixed-endian persisted-state layout: magic bytes,
    /// version, size, the six weights in `a1,a2,b1,b2,c1,c2` order, the
    /// seed, the attempt counter, then `n*n` vertex-type code bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(4 + 2 + 4 + 6 * 8 + 8 + 8 + self.vertices.len());
        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&VERSION.to_le_bytes());
        buf.extend_from_slice(&(self.n as u32).to_le_bytes());
        for w in [
            self.weights.a1,
            self.weights.a2,
            self.weights.b1,
            self.weights.b2,
            self.weights.c1,
            self.weights.c2,
        ] {
            buf.extend_from_slice(&w.to_le_bytes());
        }
        buf.extend_from_slice(&self.seed.to_le_bytes());
        buf.extend_from_slice(&self.attempts.to_le_bytes());
        buf.extend(self.vertices.iter().map(|v| v.code()));
        buf
    }

    /// Decode the layout written by [`Snapshot::to_bytes`]. The returned
    /// snapshot's `stats` only reflects the attempt counter and vertex
    /// occupancy recoverable from the encoding (acceptance bookkeeping
    /// beyond `attempts` is not part of the persisted format); height is
    /// not recomputed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
        let header_len = 4 + 2 + 4 + 6 * 8 + 8 + 8;
        if bytes.len() < header_len {
            return Err(SixVertexError::InvalidSnapshot {
                reason: "buffer shorter than the fixed header",
            });
        }
        if &bytes[0..4] != MAGIC {
            return Err(SixVertexError::InvalidSnapshot {
                reason: "missing SIXV magic bytes",
            });
        }
        let mut cursor = 4;
        let version = u16::from_le_bytes(bytes[cursor..cursor + 2].try_into().unwrap());
        cursor += 2;
        if version != VERSION {
            return Err(SixVertexError::InvalidSnapshot {
                reason: "unsupported snapshot version",
            });
        }
        let n = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().unwrap()) as usize;
        cursor += 4;

        let mut weight_values = [0f64; 6];
        for slot in &mut weight_values {
            *slot = f64::from_le_bytes(bytes[cursor..cursor + 8].try_into().unwrap());
            cursor += 8;
        }
        let weights = Weights::new(
            weight_values[0],
            weight_values[1],
            weight_values[2],
            weight_values[3],
            weight_values[4],
            weight_values[5],
        )?;

        let seed = u64::from_le_bytes(bytes[cursor..cursor + 8].try_into().unwrap());
        cursor += 8;
        let attempts = u64::from_le_bytes(bytes[cursor..cursor + 8].try_into().unwrap());
        cursor += 8;

        let expected_len = header_len + n * n;
        if bytes.len() != expected_len {
            return Err(SixVertexError::InvalidSnapshot {
                reason: "vertex payload length does not match n*n",
            });
        }
        let mut vertices = Vec::with_capacity(n * n);
        for &code in &bytes[cursor..expected_len] {
            let vertex = VertexType::from_code(code).ok_or(SixVertexError::InvalidSnapshot {
                reason: "vertex code out of range",
            })?;
            vertices.push(vertex);
        }

        let type_counts = crate::observables::TypeCounts::from_vertices(&vertices);
        let stats = Stats {
            attempts,
            successful_flips: 0,
            flippable_count: 0,
            type_counts,
        };

        Ok(Snapshot::new(n, weights, seed, attempts, vertices, stats, None))
    }
}
