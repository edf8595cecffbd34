//! Game variants and their board topology.
//!
//! One rules engine serves every variant; the differences are confined
//! to constant data selected by a [`Variant`] tag: the per-side piece
//! allotment and the [`BoardTopology`] (adjacency edges and mill lines).

pub mod topology;

use serde::{Deserialize, Serialize};

pub use topology::BoardTopology;

/// Which member of the mill family is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Nine Men's Morris: 9 pieces per side, orthogonal lines only.
    Classic9,
    /// Twelve Men's Morris: 12 pieces per side, plus the four corner
    /// diagonals of each ring (extra edges and extra mills).
    Extended12,
}

impl Variant {
    /// Pieces each side introduces during the placement phase.
    #[must_use]
    pub const fn pieces_per_side(self) -> u32 {
        match self {
            Variant::Classic9 => 9,
            Variant::Extended12 => 12,
        }
    }

    /// Number of plies the placement phase lasts.
    #[must_use]
    pub const fn placement_plies(self) -> u32 {
        self.pieces_per_side() * 2
    }

    /// The shared topology for this variant.
    #[must_use]
    pub fn topology(self) -> &'static BoardTopology {
        BoardTopology::get(self)
    }
}
