//! The flip update primitive and flippable-index (re)scanning.
//!
//! Design note: an up-flip anchored at `(rt+1, cl)` and a down-flip
//! anchored at `(rt, cl+1)` address the identical 2×2 block `(rt, cl)`.
//! To avoid double-counting one physical plaquette under two anchor
//! encodings, the index and its scans always use the canonical up-anchor
//! form for a given block; `Direction::Down` remains a valid, equivalent
//! way to address the same block when calling [`flip`] directly.

use std::collections::HashSet;

use super::anchor::{Anchor, Direction};
use super::catalog;
use super::index::FlippableIndex;
use crate::error::{Result, SixVertexError};
use crate::lattice::State;
use crate::vertex::VertexType;

/// The four corner types of the block with top-left corner `(rt, cl)`, in
/// (top-left, top-right, bottom-right, bottom-left) order.
#[must_use]
pub fn corners_at(state: &State, rt: usize, cl: usize) -> [VertexType; 4] {
    [
        state.vertex(rt, cl),
        state.vertex(rt, cl + 1),
        state.vertex(rt + 1, cl + 1),
        state.vertex(rt + 1, cl),
    ]
}

fn is_flippable_block(state: &State, rt: usize, cl: usize) -> bool {
    catalog::lookup(corners_at(state, rt, cl)).is_some()
}

/// The canonical (up-direction) anchor for the block with top-left
/// corner `(rt, cl)`.
#[must_use]
pub fn anchor_for_block(rt: usize, cl: usize) -> Anchor {
    Anchor::new(rt + 1, cl, Direction::Up)
}

/// Scan every block of a lattice of size `n` and build its flippable
/// index from scratch. Used once at simulation construction; incremental
/// updates thereafter go through [`flip`].
#[must_use]
pub fn full_scan(state: &State) -> FlippableIndex {
    let n = state.n();
    let mut index = FlippableIndex::new();
    if n < 2 {
        return index;
    }
    for rt in 0..n - 1 {
        for cl in 0..n - 1 {
            if is_flippable_block(state, rt, cl) {
                index.insert(anchor_for_block(rt, cl));
            }
        }
    }
    index
}

/// Apply the flip addressed by `anchor`: read the four corner types,
/// verify the pattern is catalogued, replace the corners and their face's
/// four boundary edges, then re-evaluate flippability of every block
/// touching the four updated vertices.
pub fn flip(state: &mut State, index: &mut FlippableIndex, anchor: Anchor) -> Result<()> {
    let n = state.n();
    let Some((rt, cl)) = anchor.block_origin(n) else {
        return Err(SixVertexError::NotFlippable {
            row: anchor.row,
            col: anchor.col,
        });
    };
    let corners = corners_at(state, rt, cl);
    let Some(new_corners) = catalog::lookup(corners) else {
        return Err(SixVertexError::NotFlippable {
            row: anchor.row,
            col: anchor.col,
        });
    };

    state.apply_flip(rt, cl, new_corners);
    rescan_neighborhood(state, index, rt, cl);
    Ok(())
}

/// Re-evaluate every block containing one of the four vertices of the
/// just-flipped block `(rt, cl)`.
fn rescan_neighborhood(state: &State, index: &mut FlippableIndex, rt: usize, cl: usize) {
    let n = state.n();
    let touched = [(rt, cl), (rt, cl + 1), (rt + 1, cl + 1), (rt + 1, cl)];
    let mut seen = HashSet::new();
    for (vr, vc) in touched {
        for dr in [-1i64, 0] {
            for dc in [-1i64, 0] {
                let r2 = vr as i64 + dr;
                let c2 = vc as i64 + dc;
                if r2 < 0 || c2 < 0 {
                    continue;
                }
                let (r2, c2) = (r2 as usize, c2 as usize);
                if r2 + 1 >= n || c2 + 1 >= n {
                    continue;
                }
                if !seen.insert((r2, c2)) {
                    continue;
                }
                let anchor = anchor_for_block(r2, c2);
                index.set(anchor, is_flippable_block(state, r2, c2));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;

    #[test]
    fn flip_is_its_own_inverse() {
        let (mut state, _) = generator::build_high(6);
        let mut index = full_scan(&state);
        let anchor = index.get(0).expect("DWBC-High n=6 must have a flippable anchor");

        let before = state.vertices().to_vec();
        flip(&mut state, &mut index, anchor).expect("first flip must succeed");
        assert_ne!(state.vertices(), before.as_slice());

        flip(&mut state, &mut index, anchor).expect("second flip must succeed");
        assert_eq!(state.vertices(), before.as_slice());
        assert_eq!(state.count_ice_rule_violations(), 0);
    }

    #[test]
    fn flip_on_non_flippable_anchor_is_an_error() {
        let (mut state, _) = generator::build_high(6);
        let mut index = full_scan(&state);
        // (0, 0) is a c1 corner deep in the frozen upper-left triangle,
        // never adjacent to a flippable block for DWBC-High at n=6.
        let anchor = anchor_for_block(0, 0);
        if index.contains(anchor) {
            return;
        }
        let err = flip(&mut state, &mut index, anchor).unwrap_err();
        assert_eq!(
            err,
            SixVertexError::NotFlippable {
                row: anchor.row,
                col: anchor.col
            }
        );
    }

    #[test]
    fn full_scan_matches_brute_force_recount() {
        let (state, _) = generator::build_low(8);
        let index = full_scan(&state);
        let n = state.n();
        let mut expected = 0usize;
        for rt in 0..n - 1 {
            for cl in 0..n - 1 {
                if is_flippable_block(&state, rt, cl) {
                    expected += 1;
                }
            }
        }
        assert_eq!(index.len(), expected);
    }
}
