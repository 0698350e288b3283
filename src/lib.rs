//! Procedural occupancy-grid generation: uniform noise, cellular-automaton
//! blob growth, and rooms connected along a minimum spanning tree.

pub mod draw;
pub mod graph;
pub mod grid;
pub mod io;
pub mod map_types;
pub mod room;
pub mod sampling;

use serde::{Deserialize, Serialize};

pub use crate::grid::GridMap;
pub use crate::map_types::{ConfigError, MapSpec};

/// Neighbor set used for adjacency: axis-aligned only, or including
/// diagonals.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Connectivity {
    Four,
    Eight,
}

const OFFSETS_4: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const OFFSETS_8: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Connectivity {
    /// The (dx, dy) offsets of this neighbor set.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Four => &OFFSETS_4,
            Connectivity::Eight => &OFFSETS_8,
        }
    }
}
