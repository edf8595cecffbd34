//! State transition.
//!
//! `apply_move` trusts its input: the move must be a member of the set
//! returned by [`crate::rules::generate_moves`] for the same position.
//! Membership is checked by the session layer, not here; debug builds
//! assert the cell-occupancy preconditions.

use crate::core::{Move, Position};

/// Produce the successor position.
///
/// Mutates the board cells for place/move/capture, flips the side to
/// move, and increments the ply counter. The result satisfies every
/// data-model invariant whenever the precondition holds.
#[must_use]
pub fn apply_move(position: &Position, mv: Move) -> Position {
    let mut next = *position;
    let mover = next.side_to_move;

    match mv {
        Move::Place { to } => {
            debug_assert!(next.board[to.index()].is_none());
            next.board[to.index()] = Some(mover);
        }
        Move::PlaceCapture { to, capture } => {
            debug_assert!(next.board[to.index()].is_none());
            debug_assert_eq!(next.board[capture.index()], Some(mover.opponent()));
            next.board[to.index()] = Some(mover);
            next.board[capture.index()] = None;
        }
        Move::Move { from, to } => {
            debug_assert_eq!(next.board[from.index()], Some(mover));
            debug_assert!(next.board[to.index()].is_none());
            next.board.swap(from.index(), to.index());
        }
        Move::MoveCapture { from, to, capture } => {
            debug_assert_eq!(next.board[from.index()], Some(mover));
            debug_assert!(next.board[to.index()].is_none());
            debug_assert_eq!(next.board[capture.index()], Some(mover.opponent()));
            next.board.swap(from.index(), to.index());
            next.board[capture.index()] = None;
        }
    }

    next.side_to_move = mover.opponent();
    next.ply += 1;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Node, Player};
    use crate::rules::generate_moves;
    use crate::variant::Variant;

    fn n(i: u8) -> Node {
        Node::new(i)
    }

    #[test]
    fn test_apply_place() {
        let position = Position::default();
        let next = apply_move(&position, Move::Place { to: n(7) });

        assert_eq!(next.piece_at(n(7)), Some(Player::White));
        assert_eq!(next.side_to_move, Player::Black);
        assert_eq!(next.ply, 1);
        // The input position is untouched.
        assert_eq!(position.ply, 0);
    }

    #[test]
    fn test_apply_place_capture() {
        let mut position = Position::default();
        position.board[21] = Some(Player::White);
        position.board[22] = Some(Player::White);
        position.board[10] = Some(Player::Black);
        position.ply = 6;

        let next = apply_move(
            &position,
            Move::PlaceCapture {
                to: n(23),
                capture: n(10),
            },
        );

        assert_eq!(next.piece_at(n(23)), Some(Player::White));
        assert_eq!(next.piece_at(n(10)), None);
        assert_eq!(next.piece_count(Player::Black), 0);
    }

    #[test]
    fn test_apply_move_and_capture() {
        let mut position = Position::default();
        position.ply = 18;
        position.board[21] = Some(Player::White);
        position.board[22] = Some(Player::White);
        position.board[14] = Some(Player::White);
        position.board[9] = Some(Player::White);
        position.board[4] = Some(Player::Black);
        position.board[5] = Some(Player::Black);
        position.board[6] = Some(Player::Black);
        position.board[7] = Some(Player::Black);

        // 14 -> 23 closes 21-22-23.
        let next = apply_move(
            &position,
            Move::MoveCapture {
                from: n(14),
                to: n(23),
                capture: n(4),
            },
        );

        assert_eq!(next.piece_at(n(14)), None);
        assert_eq!(next.piece_at(n(23)), Some(Player::White));
        assert_eq!(next.piece_at(n(4)), None);
        assert_eq!(next.ply, 19);
        assert_eq!(next.side_to_move, Player::Black);
    }

    #[test]
    fn test_generated_moves_preserve_invariants() {
        let position = Position::default();
        let topology = Variant::Classic9.topology();

        for mv in generate_moves(&position, topology) {
            let next = apply_move(&position, mv);
            next.validate(Variant::Classic9).unwrap();
            assert_eq!(next.ply, position.ply + 1);
            assert_eq!(next.side_to_move, position.side_to_move.opponent());
        }
    }
}
