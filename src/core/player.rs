//! Player color.

use serde::{Deserialize, Serialize};

/// One of the two sides of a mill game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The other side.
    ///
    /// ```
    /// use morris_engine::Player;
    ///
    /// assert_eq!(Player::White.opponent(), Player::Black);
    /// assert_eq!(Player::Black.opponent(), Player::White);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Single-letter tag used by the text notation (`'w'` / `'b'`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}
