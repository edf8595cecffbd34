//! Node index ↔ board coordinate.
//!
//! Coordinates follow the fixed layout of the original notation: file
//! letters `a`..`g` left to right, rank digits `1`..`7` bottom to top,
//! node 0 at `a7` through node 23 at `g1`.

use std::fmt;

use crate::core::{Node, NODE_COUNT};
use crate::error::ParseError;

/// Coordinate text for each node, indexed by [`Node::index`].
const COORDS: [&str; NODE_COUNT] = [
    "a7", "d7", "g7", // outer ring, top
    "b6", "d6", "f6", // middle ring, top
    "c5", "d5", "e5", // inner ring, top
    "a4", "b4", "c4", // left arm
    "e4", "f4", "g4", // right arm
    "c3", "d3", "e3", // inner ring, bottom
    "b2", "d2", "f2", // middle ring, bottom
    "a1", "d1", "g1", // outer ring, bottom
];

/// The coordinate string for `node`.
#[must_use]
pub fn coord(node: Node) -> &'static str {
    COORDS[node.index()]
}

/// Parse a coordinate string into a node.
///
/// Total over the 24 valid coordinates; anything else is a
/// [`ParseError::Coordinate`].
pub fn node_from_coord(text: &str) -> Result<Node, ParseError> {
    COORDS
        .iter()
        .position(|&c| c == text)
        .map(|i| Node::new(i as u8))
        .ok_or_else(|| ParseError::Coordinate {
            coord: text.to_owned(),
        })
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(coord(*self))
    }
}
