//! Game-over detection.
//!
//! Evaluated immediately after every state transition, in a fixed
//! order; each check runs only when no earlier check already produced a
//! terminal result. Externally decided results (resignation, timeout,
//! agreed draw) are set by the session, never by the detector.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Player, Position};
use crate::variant::BoardTopology;

use super::repetition::{DrawClock, FIFTY_MOVE_RULE_PLIES};

/// Why the losing side lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The loser was reduced below 3 pieces.
    MaterialLoss,
    /// The loser had no legal move.
    Blocked,
    /// The loser resigned.
    Resignation,
    /// The loser's clock expired.
    Timeout,
}

/// Why the game was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    /// 50 full moves per side without a placement or capture.
    FiftyMoveRule,
    /// The same position occurred for the third time.
    ThreefoldRepetition,
    /// A draw offer was accepted.
    Agreement,
}

/// Terminal result of a game.
///
/// Computed fresh after every transition; once produced, the game is
/// over and no further moves may be applied until a new position is
/// established.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOver {
    Winner { winner: Player, reason: WinReason },
    Draw { reason: DrawReason },
}

/// Evaluate the terminal conditions for `position`.
///
/// `legal_moves` must be the generated set for `position`; `clock` must
/// already have recorded `position`. Order: material loss, blocked,
/// fifty-move rule, threefold repetition. Returns `None` while the game
/// continues.
#[must_use]
pub fn evaluate_game_over(
    position: &Position,
    topology: &BoardTopology,
    legal_moves: &[Move],
    clock: &DrawClock,
) -> Option<GameOver> {
    let mover = position.side_to_move;

    if position.placement_over(topology.variant()) && position.piece_count(mover) < 3 {
        return Some(GameOver::Winner {
            winner: mover.opponent(),
            reason: WinReason::MaterialLoss,
        });
    }

    if legal_moves.is_empty() {
        return Some(GameOver::Winner {
            winner: mover.opponent(),
            reason: WinReason::Blocked,
        });
    }

    if clock.plies_without_advancement() >= FIFTY_MOVE_RULE_PLIES {
        return Some(GameOver::Draw {
            reason: DrawReason::FiftyMoveRule,
        });
    }

    if clock.occurrences(position) >= 3 {
        return Some(GameOver::Draw {
            reason: DrawReason::ThreefoldRepetition,
        });
    }

    None
}
