//! The flip engine: the catalog of flippable 2×2 patterns, the
//! incremental flippable-site index, and the plaquette update primitive.

mod anchor;
mod catalog;
mod engine;
mod index;

pub use anchor::{Anchor, Direction};
pub use catalog::{lookup, pattern_count};
pub use engine::{anchor_for_block, corners_at, flip, full_scan};
pub use index::FlippableIndex;
