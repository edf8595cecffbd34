//! Position ↔ string codec.
//!
//! Four colon-separated fields: side to move, white pieces, black
//! pieces, move number. Piece fields carry their own color letter so a
//! reader never has to count colons, e.g.:
//!
//! ```text
//! w:wa1,d1:bg7,d2:4
//! b:w:b:1
//! ```
//!
//! The move number counts full moves starting at 1; the internal ply
//! counter is `(move_number - 1) * 2`, plus one when Black is to move.
//! Both piece lists may be empty. Parsing accepts the piece fields in
//! either color order but requires them to be distinct and the listed
//! cells to be disjoint.

use std::fmt;
use std::str::FromStr;

use crate::core::{Node, Player, Position};
use crate::error::ParseError;

use super::coord::{coord, node_from_coord};

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.side_to_move.letter())?;
        for player in [Player::White, Player::Black] {
            write!(f, "{}", player.letter())?;
            let mut first = true;
            for node in Node::all() {
                if self.piece_at(node) == Some(player) {
                    if !first {
                        f.write_str(",")?;
                    }
                    f.write_str(coord(node))?;
                    first = false;
                }
            }
            f.write_str(":")?;
        }
        write!(f, "{}", self.move_number())
    }
}

fn parse_side(letter: &str) -> Option<Player> {
    match letter {
        "w" => Some(Player::White),
        "b" => Some(Player::Black),
        _ => None,
    }
}

/// Parse one piece field: a color letter followed by a possibly empty
/// comma-separated coordinate list.
fn parse_piece_field(field: &str) -> Option<(Player, Vec<Node>)> {
    let player = parse_side(field.get(..1)?)?;
    let rest = &field[1..];
    if rest.is_empty() {
        return Some((player, Vec::new()));
    }

    let mut nodes = Vec::new();
    for token in rest.split(',') {
        nodes.push(node_from_coord(token).ok()?);
    }
    Some((player, nodes))
}

/// A 1..=3 digit move number, at least 1.
fn parse_move_number(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 3 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u32 = field.parse().ok()?;
    (number >= 1).then_some(number)
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::PositionSyntax {
            text: text.to_owned(),
        };

        let mut fields = text.split(':');
        let side = fields.next().and_then(parse_side).ok_or_else(malformed)?;
        let first = fields
            .next()
            .and_then(parse_piece_field)
            .ok_or_else(malformed)?;
        let second = fields
            .next()
            .and_then(parse_piece_field)
            .ok_or_else(malformed)?;
        let move_number = fields
            .next()
            .and_then(parse_move_number)
            .ok_or_else(malformed)?;
        if fields.next().is_some() || first.0 == second.0 {
            return Err(malformed());
        }

        let mut position = Position::default();
        position.side_to_move = side;
        position.ply = (move_number - 1) * 2 + u32::from(side == Player::Black);
        for (player, nodes) in [first, second] {
            for node in nodes {
                if position.piece_at(node).is_some() {
                    return Err(malformed());
                }
                position.board[node.index()] = Some(player);
            }
        }
        Ok(position)
    }
}
