//! The flippable-plaquette catalog, derived by enumeration rather than
//! hand-transcribed.
//!
//! A 2×2 block encloses one face of the lattice graph, bounded by four
//! edges (two horizontal, two vertical). A flip reverses all four of
//! those edges at once. For each corner vertex exactly two of its four
//! local edge fields belong to this face boundary (the other two are
//! shared with vertices outside the block and are untouched); the block
//! is flippable iff, after reversing each corner's two face-boundary
//! fields, all four corners still land on one of the six catalogued
//! vertex configurations.
//!
//! The catalog is built once behind a [`OnceLock`] by enumerating all
//! `6^4 = 1296` four-type tuples, discarding those whose shared interior
//! edges disagree (tuples that could never arise in a consistent
//! lattice), then keeping those where every corner's flip is defined.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::vertex::{config_of, type_of, EdgeConfig, VertexType};

/// Corner flip for the top-left position: its right and bottom fields
/// face the block interior and get reversed; left and top are untouched.
fn flip_tl(v: VertexType) -> Option<VertexType> {
    let cfg = config_of(v);
    type_of(EdgeConfig {
        left: cfg.left,
        top: cfg.top,
        right: cfg.right.flip(),
        bottom: cfg.bottom.flip(),
    })
}

/// Corner flip for the top-right position: left and bottom face the
/// block interior.
fn flip_tr(v: VertexType) -> Option<VertexType> {
    let cfg = config_of(v);
    type_of(EdgeConfig {
        right: cfg.right,
        top: cfg.top,
        left: cfg.left.flip(),
        bottom: cfg.bottom.flip(),
    })
}

/// Corner flip for the bottom-right position: left and top face the
/// block interior.
fn flip_br(v: VertexType) -> Option<VertexType> {
    let cfg = config_of(v);
    type_of(EdgeConfig {
        right: cfg.right,
        bottom: cfg.bottom,
        left: cfg.left.flip(),
        top: cfg.top.flip(),
    })
}

/// Corner flip for the bottom-left position: right and top face the
/// block interior.
fn flip_bl(v: VertexType) -> Option<VertexType> {
    let cfg = config_of(v);
    type_of(EdgeConfig {
        left: cfg.left,
        bottom: cfg.bottom,
        right: cfg.right.flip(),
        top: cfg.top.flip(),
    })
}

/// `true` when the two vertices sharing a horizontal edge (left vertex's
/// right field against right vertex's left field) agree.
fn h_edges_agree(left: VertexType, right: VertexType) -> bool {
    config_of(left).right.flip() == config_of(right).left
}

/// `true` when the two vertices sharing a vertical edge (top vertex's
/// bottom field against bottom vertex's top field) agree.
fn v_edges_agree(top: VertexType, bottom: VertexType) -> bool {
    config_of(top).bottom.flip() == config_of(bottom).top
}

type Corners = [VertexType; 4];

fn catalog() -> &'static HashMap<Corners, Corners> {
    static CATALOG: OnceLock<HashMap<Corners, Corners>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn build_catalog() -> HashMap<Corners, Corners> {
    let mut map = HashMap::new();
    for tl in VertexType::ALL {
        for tr in VertexType::ALL {
            if !h_edges_agree(tl, tr) {
                continue;
            }
            for bl in VertexType::ALL {
                if !v_edges_agree(tl, bl) {
                    continue;
                }
                for br in VertexType::ALL {
                    if !h_edges_agree(bl, br) || !v_edges_agree(tr, br) {
                        continue;
                    }
                    let (Some(tl2), Some(tr2), Some(br2), Some(bl2)) =
                        (flip_tl(tl), flip_tr(tr), flip_br(br), flip_bl(bl))
                    else {
                        continue;
                    };
                    map.insert([tl, tr, br, bl], [tl2, tr2, br2, bl2]);
                }
            }
        }
    }
    map
}

/// Look up the flip counterpart for the four corners (top-left, top-right,
/// bottom-right, bottom-left) of a plaquette, or `None` if the pattern is
/// not flippable.
#[must_use]
pub fn lookup(corners: Corners) -> Option<Corners> {
    catalog().get(&corners).copied()
}

/// Number of catalogued flippable patterns.
#[must_use]
pub fn pattern_count() -> usize {
    catalog().len()
}
