//! Board node identifier.
//!
//! Both variants play on the same 24 intersection points, numbered row
//! by row from the top-left corner of the outer ring (`0` = `a7`) to the
//! bottom-right corner (`23` = `g1`). The coordinate text for a node
//! lives in [`crate::notation`]; the core model is purely numeric.

use serde::{Deserialize, Serialize};

/// Number of board nodes, identical for every variant.
pub const NODE_COUNT: usize = 24;

/// Index of a board node, guaranteed in `0..24`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node(u8);

impl Node {
    /// Create a node index.
    ///
    /// Panics if `index` is out of range; node indices come from static
    /// topology tables, the notation parser, or move generation, all of
    /// which only produce valid values.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < NODE_COUNT as u8, "node index out of range");
        Self(index)
    }

    /// The raw index as a `usize`, for board array access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 24 nodes in index order.
    pub fn all() -> impl Iterator<Item = Node> {
        (0..NODE_COUNT as u8).map(Node)
    }
}
