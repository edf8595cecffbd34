//! Legal-move generation.
//!
//! Deterministic and side-effect free: the board is copied once, every
//! candidate is tried speculatively and undone before the next. The
//! returned vector is exhaustive — it is exactly the set of moves the
//! session will accept for that position.

use smallvec::SmallVec;

use crate::core::{Board, Move, Node, Phase, Player, Position};
use crate::variant::BoardTopology;

/// Enumerate all legal moves for the side to move.
///
/// Never panics on a well-formed position. The phase (placement,
/// movement, flying) is derived from the position and the topology's
/// variant before dispatch.
#[must_use]
pub fn generate_moves(position: &Position, topology: &BoardTopology) -> Vec<Move> {
    let mut board = position.board;
    let mover = position.side_to_move;
    let mut moves = Vec::new();

    match position.phase(topology.variant()) {
        Phase::Placement => placement_moves(&mut board, topology, mover, &mut moves),
        Phase::Movement => movement_moves(&mut board, topology, mover, &mut moves),
        Phase::Flying => flying_moves(&mut board, topology, mover, &mut moves),
    }

    moves
}

/// Opposing nodes that may be captured after `mover` closed a mill.
///
/// A piece inside an opponent mill is protected, unless every opposing
/// piece sits in some mill — then the protection lapses entirely.
fn capture_targets(board: &Board, topology: &BoardTopology, mover: Player) -> SmallVec<[Node; 8]> {
    let opponent = mover.opponent();
    let all_in_mills = topology.all_in_mills(board, opponent);

    Node::all()
        .filter(|&node| board[node.index()] == Some(opponent))
        .filter(|&node| all_in_mills || !topology.is_mill(board, opponent, node))
        .collect()
}

/// Emit the move(s) for a speculative landing on `to`.
///
/// One capture variant per legal target when a mill closed; the plain
/// shape otherwise. A closed mill with zero targets degrades to the
/// plain shape rather than vanishing from the legal set.
fn emit(
    board: &Board,
    topology: &BoardTopology,
    mover: Player,
    to: Node,
    plain: Move,
    with_capture: impl Fn(Node) -> Move,
    moves: &mut Vec<Move>,
) {
    if topology.is_mill(board, mover, to) {
        let targets = capture_targets(board, topology, mover);

        if targets.is_empty() {
            moves.push(plain);
        } else {
            moves.extend(targets.into_iter().map(with_capture));
        }
    } else {
        moves.push(plain);
    }
}

fn placement_moves(board: &mut Board, topology: &BoardTopology, mover: Player, moves: &mut Vec<Move>) {
    for to in Node::all() {
        if board[to.index()].is_some() {
            continue;
        }

        board[to.index()] = Some(mover);
        emit(
            board,
            topology,
            mover,
            to,
            Move::Place { to },
            |capture| Move::PlaceCapture { to, capture },
            moves,
        );
        board[to.index()] = None;
    }
}

fn movement_moves(board: &mut Board, topology: &BoardTopology, mover: Player, moves: &mut Vec<Move>) {
    for from in Node::all() {
        if board[from.index()] != Some(mover) {
            continue;
        }

        let neighbors: SmallVec<[Node; 4]> = topology
            .neighbors(from)
            .iter()
            .copied()
            .filter(|n| board[n.index()].is_none())
            .collect();

        for to in neighbors {
            board[from.index()] = None;
            board[to.index()] = Some(mover);
            emit(
                board,
                topology,
                mover,
                to,
                Move::Move { from, to },
                |capture| Move::MoveCapture { from, to, capture },
                moves,
            );
            board[to.index()] = None;
            board[from.index()] = Some(mover);
        }
    }
}

fn flying_moves(board: &mut Board, topology: &BoardTopology, mover: Player, moves: &mut Vec<Move>) {
    for from in Node::all() {
        if board[from.index()] != Some(mover) {
            continue;
        }

        for to in Node::all() {
            if board[to.index()].is_some() {
                continue;
            }

            board[from.index()] = None;
            board[to.index()] = Some(mover);
            emit(
                board,
                topology,
                mover,
                to,
                Move::Move { from, to },
                |capture| Move::MoveCapture { from, to, capture },
                moves,
            );
            board[to.index()] = None;
            board[from.index()] = Some(mover);
        }
    }
}
