//! Draw bookkeeping: the fifty-move counter and the repetition window.
//!
//! Both clocks share one reset: every "advancement" (a placement or a
//! capture) zeroes the non-advancement counter and clears the window.
//! Only positions recorded after the last advancement can contribute to
//! a threefold repetition; this is a deliberate behavioral choice, not
//! an accident of the bookkeeping.

use rustc_hash::FxHashMap;

use crate::core::Position;

/// Plies without an advancement after which the game is drawn
/// (50 full moves for each side).
pub const FIFTY_MOVE_RULE_PLIES: u32 = 100;

/// Per-game draw clocks, recorded once after every applied move.
///
/// Occurrence counting is keyed by [`Position::repetition_key`] (board
/// occupancy plus side to move; the ply counter does not distinguish
/// positions).
#[derive(Clone, Debug, Default)]
pub struct DrawClock {
    plies_without_advancement: u32,
    occurrences: FxHashMap<u64, u32>,
}

impl DrawClock {
    /// Fresh clocks for a new game or a reset session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the position reached by a move.
    ///
    /// `advancement` must reflect [`crate::core::Move::is_advancement`]
    /// of the move that produced `position`.
    pub fn record(&mut self, position: &Position, advancement: bool) {
        if advancement {
            self.plies_without_advancement = 0;
            self.occurrences.clear();
        } else {
            self.plies_without_advancement += 1;
        }

        *self
            .occurrences
            .entry(position.repetition_key())
            .or_insert(0) += 1;
    }

    /// Plies since the last advancement.
    #[must_use]
    pub fn plies_without_advancement(&self) -> u32 {
        self.plies_without_advancement
    }

    /// Times `position` has occurred since the last advancement.
    #[must_use]
    pub fn occurrences(&self, position: &Position) -> u32 {
        self.occurrences
            .get(&position.repetition_key())
            .copied()
            .unwrap_or(0)
    }

    /// Forget everything (new game).
    pub fn reset(&mut self) {
        self.plies_without_advancement = 0;
        self.occurrences.clear();
    }
}
