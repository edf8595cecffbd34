//! Error types.
//!
//! Parse failures and rule violations are ordinary values, never
//! panics. [`EngineError`] is the catch-all for the string-driven entry
//! points; the finer-grained types are returned wherever only one kind
//! of failure can occur.

use derive_more::{Display, Error, From};

use crate::core::Move;

/// A notation string that does not match its grammar.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Not one of the 24 board coordinates.
    #[display("invalid coordinate {coord:?}")]
    Coordinate {
        #[error(not(source))]
        coord: String,
    },
    /// Not a well-formed move string.
    #[display("invalid move string {text:?}")]
    MoveSyntax {
        #[error(not(source))]
        text: String,
    },
    /// Not a well-formed position string.
    #[display("invalid position string {text:?}")]
    PositionSyntax {
        #[error(not(source))]
        text: String,
    },
}

/// A syntactically valid move that is not legal in the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("illegal move {mv}")]
pub struct IllegalMoveError {
    /// The rejected move.
    #[error(not(source))]
    pub mv: Move,
}

/// A position that breaks the data-model invariants.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("invariant violation: {detail}")]
pub struct InvariantViolation {
    #[error(not(source))]
    detail: String,
}

impl InvariantViolation {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Any failure an engine entry point can report.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    Parse(ParseError),
    Illegal(IllegalMoveError),
    Invariant(InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Node;

    #[test]
    fn test_display_messages() {
        let parse = ParseError::Coordinate {
            coord: "h9".to_owned(),
        };
        assert_eq!(parse.to_string(), "invalid coordinate \"h9\"");

        let illegal = IllegalMoveError {
            mv: Move::Place { to: Node::new(7) },
        };
        assert_eq!(illegal.to_string(), "illegal move d5");

        let invariant = InvariantViolation::new("too many pieces");
        assert_eq!(invariant.to_string(), "invariant violation: too many pieces");
    }

    #[test]
    fn test_engine_error_from_conversions() {
        let err: EngineError = ParseError::MoveSyntax {
            text: "??".to_owned(),
        }
        .into();
        assert!(matches!(err, EngineError::Parse(_)));

        let err: EngineError = IllegalMoveError {
            mv: Move::Place { to: Node::new(0) },
        }
        .into();
        assert!(matches!(err, EngineError::Illegal(_)));
    }
}
