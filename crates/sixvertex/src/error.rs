//! Error types for the six-vertex simulator.
//!
//! Defines the single error enum exposed by the public API and a
//! convenience result alias. Construction-time errors are ordinary user
//! mistakes (bad size, bad weights); the others indicate an invariant
//! violation inside this crate and should never occur in a correct build,
//! but are still returned rather than panicked on so callers can assert on
//! them in tests.

use thiserror::Error;

/// Errors produced by constructing or driving a [`crate::Simulation`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SixVertexError {
    /// Lattice size must be at least 2.
    #[error("invalid lattice size {size}: must be >= 2")]
    InvalidSize { size: usize },

    /// A Boltzmann weight was non-positive or non-finite.
    #[error("invalid weight for vertex type {field}: must be finite and > 0")]
    InvalidWeights { field: &'static str },

    /// The initial-state generator produced ice-rule violations.
    ///
    /// This is a programmer error in this crate's own generator, not a
    /// caller mistake; a correct build never returns it.
    #[error("initial state generation failed: {violations} ice-rule violation(s)")]
    InvalidInitialState { violations: usize },

    /// `flip` was invoked on a plaquette that is not in the flip catalog.
    #[error("plaquette anchored at ({row}, {col}) is not flippable")]
    NotFlippable { row: usize, col: usize },

    /// Reserved for a future concurrent engine; the current single-writer,
    /// copy-based snapshot implementation never returns this variant.
    #[error("snapshot denied")]
    SnapshotDenied,

    /// `Snapshot::from_bytes` was given malformed or truncated input.
    #[error("invalid snapshot encoding: {reason}")]
    InvalidSnapshot { reason: &'static str },
}

/// Convenient alias for results returned by this crate's public API.
pub type Result<T> = core::result::Result<T, SixVertexError>;
