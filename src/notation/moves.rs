//! Move ↔ string codec.
//!
//! Grammar, one line per shape:
//!
//! ```text
//! d5            place
//! d5xe4         place + capture
//! a1-a4         move
//! a1-a4xd7      move + capture
//! ```

use std::fmt;
use std::str::FromStr;

use crate::core::Move;
use crate::error::ParseError;

use super::coord::node_from_coord;

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Place { to } => write!(f, "{to}"),
            Move::PlaceCapture { to, capture } => write!(f, "{to}x{capture}"),
            Move::Move { from, to } => write!(f, "{from}-{to}"),
            Move::MoveCapture { from, to, capture } => write!(f, "{from}-{to}x{capture}"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MoveSyntax {
            text: text.to_owned(),
        };

        // Coordinate parsing is strict, so any stray separator ends up
        // inside a coordinate token and is rejected there.
        let (body, capture) = match text.split_once('x') {
            Some((body, capture)) => (body, Some(node_from_coord(capture).map_err(|_| malformed())?)),
            None => (text, None),
        };

        match body.split_once('-') {
            Some((from, to)) => {
                let from = node_from_coord(from).map_err(|_| malformed())?;
                let to = node_from_coord(to).map_err(|_| malformed())?;

                Ok(match capture {
                    Some(capture) => Move::MoveCapture { from, to, capture },
                    None => Move::Move { from, to },
                })
            }
            None => {
                let to = node_from_coord(body).map_err(|_| malformed())?;

                Ok(match capture {
                    Some(capture) => Move::PlaceCapture { to, capture },
                    None => Move::Place { to },
                })
            }
        }
    }
}
