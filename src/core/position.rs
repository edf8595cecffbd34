//! Authoritative game state.
//!
//! A [`Position`] is a plain value: board cells, side to move, ply
//! counter. Everything else (phase, piece counts, flying) is derived.
//! Histories are plain sequences of positions owned by the caller.

use serde::{Deserialize, Serialize};

use crate::error::InvariantViolation;
use crate::variant::Variant;

use super::node::{Node, NODE_COUNT};
use super::player::Player;

/// Board cell contents, one entry per node.
pub type Board = [Option<Player>; NODE_COUNT];

/// Rule phase of the side to move, derived from `(Position, Variant)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Both sides are still introducing their piece allotment.
    Placement,
    /// Pieces slide along board edges.
    Movement,
    /// The side to move is down to 3 pieces and may jump anywhere.
    Flying,
}

/// A complete game position.
///
/// `ply` counts half-moves since the start of the game; it determines
/// the phase and formats move numbers in the text notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Cell contents, indexed by [`Node::index`].
    pub board: Board,
    /// The side whose turn it is.
    pub side_to_move: Player,
    /// Half-moves played since game start.
    pub ply: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [None; NODE_COUNT],
            side_to_move: Player::White,
            ply: 0,
        }
    }
}

impl Position {
    /// The cell contents at `node`.
    #[must_use]
    pub fn piece_at(&self, node: Node) -> Option<Player> {
        self.board[node.index()]
    }

    /// Number of `player`'s pieces currently on the board.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> usize {
        self.board.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Whether the placement phase has ended for both sides.
    #[must_use]
    pub fn placement_over(&self, variant: Variant) -> bool {
        self.ply >= variant.placement_plies()
    }

    /// The phase governing the side to move.
    ///
    /// ```
    /// use morris_engine::{Phase, Position, Variant};
    ///
    /// let start = Position::default();
    /// assert_eq!(start.phase(Variant::Classic9), Phase::Placement);
    /// ```
    #[must_use]
    pub fn phase(&self, variant: Variant) -> Phase {
        if !self.placement_over(variant) {
            Phase::Placement
        } else if self.piece_count(self.side_to_move) == 3 {
            Phase::Flying
        } else {
            Phase::Movement
        }
    }

    /// Whether `player` may jump to any empty node.
    ///
    /// True exactly when placement is over and `player` holds 3 pieces.
    #[must_use]
    pub fn is_flying(&self, player: Player, variant: Variant) -> bool {
        self.placement_over(variant) && self.piece_count(player) == 3
    }

    /// Move number shown in the text notation (1-based full moves).
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.ply / 2 + 1
    }

    /// Check the data-model invariants against `variant`.
    ///
    /// - neither side exceeds the variant's per-side allotment,
    /// - the ply counter accounts for every piece on the board.
    ///
    /// Used where positions cross a trust boundary (setup strings,
    /// session resets). Internal transitions preserve these invariants
    /// by construction.
    pub fn validate(&self, variant: Variant) -> Result<(), InvariantViolation> {
        let per_side = variant.pieces_per_side() as usize;
        let white = self.piece_count(Player::White);
        let black = self.piece_count(Player::Black);

        if white > per_side || black > per_side {
            return Err(InvariantViolation::new(format!(
                "piece counts {white}w/{black}b exceed the {per_side} allowed per side"
            )));
        }

        if white + black > self.ply as usize {
            return Err(InvariantViolation::new(format!(
                "{} pieces on board but only {} plies played",
                white + black,
                self.ply
            )));
        }

        Ok(())
    }

    /// Pack board occupancy and side to move into a `u64`.
    ///
    /// Two bits per cell plus one side bit; positions with equal keys are
    /// identical for repetition purposes (the ply counter is excluded).
    #[must_use]
    pub fn repetition_key(&self) -> u64 {
        let mut key = 0u64;

        for cell in self.board.iter().rev() {
            key <<= 2;
            key |= match cell {
                None => 0,
                Some(Player::White) => 1,
                Some(Player::Black) => 2,
            };
        }

        key | (((self.side_to_move == Player::Black) as u64) << 48)
    }
}
