//! The six admissible vertex configurations and their edge algebra.
//!
//! Purpose
//! - Define the closed set of vertex types allowed by the ice rule (two
//!   incident edges in, two out) and the bijection between a type and its
//!   four local edge tags.
//!
//! Conventions
//! - Tags are *local*: `In` means the edge's arrow points into this vertex,
//!   `Out` means it points away. The lattice module is responsible for
//!   reconciling local tags with the global per-edge convention when it
//!   materializes the edge arrays (a vertex's right/bottom edge is shared
//!   with its right/bottom neighbor's left/top edge, and the two vertices
//!   disagree on "into" vs "out of" for that shared edge).

use std::fmt;

/// One of the two possible arrow directions of an edge, from a vertex's
/// own local point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Edge {
    In,
    Out,
}

impl Edge {
    /// The opposite direction.
    #[must_use]
    pub const fn flip(self) -> Edge {
        match self {
            Edge::In => Edge::Out,
            Edge::Out => Edge::In,
        }
    }
}

/// The four local edge tags of a single vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeConfig {
    pub left: Edge,
    pub right: Edge,
    pub top: Edge,
    pub bottom: Edge,
}

/// The six vertex types admissible under the ice rule.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum VertexType {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl VertexType {
    /// All six types, in a fixed canonical order.
    pub const ALL: [VertexType; 6] = [
        VertexType::A1,
        VertexType::A2,
        VertexType::B1,
        VertexType::B2,
        VertexType::C1,
        VertexType::C2,
    ];

    /// Byte code used by the persisted-state snapshot format.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            VertexType::A1 => 0,
            VertexType::A2 => 1,
            VertexType::B1 => 2,
            VertexType::B2 => 3,
            VertexType::C1 => 4,
            VertexType::C2 => 5,
        }
    }

    /// Inverse of [`VertexType::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<VertexType> {
        match code {
            0 => Some(VertexType::A1),
            1 => Some(VertexType::A2),
            2 => Some(VertexType::B1),
            3 => Some(VertexType::B2),
            4 => Some(VertexType::C1),
            5 => Some(VertexType::C2),
            _ => None,
        }
    }
}

impl fmt::Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VertexType::A1 => "a1",
            VertexType::A2 => "a2",
            VertexType::B1 => "b1",
            VertexType::B2 => "b2",
            VertexType::C1 => "c1",
            VertexType::C2 => "c2",
        };
        f.write_str(s)
    }
}

/// The canonical edge configuration for a vertex type. Total.
#[must_use]
pub const fn config_of(vertex: VertexType) -> EdgeConfig {
    use Edge::{In, Out};
    match vertex {
        VertexType::A1 => EdgeConfig {
            left: In,
            top: In,
            right: Out,
            bottom: Out,
        },
        VertexType::A2 => EdgeConfig {
            right: In,
            bottom: In,
            left: Out,
            top: Out,
        },
        VertexType::B1 => EdgeConfig {
            left: In,
            right: In,
            top: Out,
            bottom: Out,
        },
        VertexType::B2 => EdgeConfig {
            top: In,
            bottom: In,
            left: Out,
            right: Out,
        },
        VertexType::C1 => EdgeConfig {
            left: In,
            bottom: In,
            right: Out,
            top: Out,
        },
        VertexType::C2 => EdgeConfig {
            right: In,
            top: In,
            left: Out,
            bottom: Out,
        },
    }
}

/// The inverse of [`config_of`]: the vertex type matching a configuration,
/// or `None` when the four tags do not satisfy the ice rule (two in, two
/// out) or do not match one of the six catalogued configurations.
#[must_use]
pub fn type_of(config: EdgeConfig) -> Option<VertexType> {
    VertexType::ALL
        .into_iter()
        .find(|&vertex| config_of(vertex) == config)
}

/// Local height-gradient contribution of a vertex type: `(from_left,
/// from_top)`, each `0` or `1`. `from_left` is `1` when the vertex's left
/// edge is locally `In` (the arrow enters from the left neighbor);
/// `from_top` is `1` when the top edge is locally `In`.
///
/// This is a local-only convenience; [`crate::observables`] reconstructs
/// the actual height field directly from the lattice's global edge arrays
/// using the gradient rule they define, since a vertex's local tags alone
/// do not determine which neighbor-relative sign the global convention
/// assigns without knowing the vertex's position relative to that edge.
#[must_use]
pub const fn height_contribution(vertex: VertexType) -> (u8, u8) {
    let cfg = config_of(vertex);
    let from_left = matches!(cfg.left, Edge::In) as u8;
    let from_top = matches!(cfg.top, Edge::In) as u8;
    (from_left, from_top)
}
