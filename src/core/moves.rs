//! Move representation.
//!
//! A move is always relative to exactly one position; it carries no
//! implicit state. Captures are atomic: closing a mill and removing the
//! opposing piece is a single move, not a staged selection (staging is a
//! UI concern layered on top of this set).

use serde::{Deserialize, Serialize};

use super::node::Node;

/// One of the four move shapes of the mill family.
///
/// Equality and hashing are structural, so membership in a generated
/// legal set can be checked directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Placement-phase drop onto an empty node.
    Place { to: Node },
    /// Placement that closes a mill and removes an opposing piece.
    PlaceCapture { to: Node, capture: Node },
    /// Slide (movement phase) or jump (flying phase) to an empty node.
    Move { from: Node, to: Node },
    /// Slide or jump that closes a mill and removes an opposing piece.
    MoveCapture { from: Node, to: Node, capture: Node },
}

impl Move {
    /// The node the mover's piece ends up on.
    #[must_use]
    pub const fn to(&self) -> Node {
        match *self {
            Move::Place { to }
            | Move::PlaceCapture { to, .. }
            | Move::Move { to, .. }
            | Move::MoveCapture { to, .. } => to,
        }
    }

    /// The node the piece left, if this is not a placement.
    #[must_use]
    pub const fn from(&self) -> Option<Node> {
        match *self {
            Move::Move { from, .. } | Move::MoveCapture { from, .. } => Some(from),
            Move::Place { .. } | Move::PlaceCapture { .. } => None,
        }
    }

    /// The captured opposing node, if any.
    #[must_use]
    pub const fn capture(&self) -> Option<Node> {
        match *self {
            Move::PlaceCapture { capture, .. } | Move::MoveCapture { capture, .. } => Some(capture),
            Move::Place { .. } | Move::Move { .. } => None,
        }
    }

    /// Whether this move resets the draw clocks.
    ///
    /// A placement or a capture is an "advancement"; only the plain
    /// slide/jump is not.
    #[must_use]
    pub const fn is_advancement(&self) -> bool {
        !matches!(self, Move::Move { .. })
    }
}
