//! Stateful game driver.
//!
//! [`GameSession`] wraps the pure rules into the object a UI or server
//! holds per game: it owns the current position, the generated legal
//! move set, the full position history, the draw clocks, and the
//! terminal result once one exists. All mutation goes through
//! [`GameSession::try_move`] and the explicit out-of-band endings
//! (resign, timeout, agreed draw); the pure layer stays reusable for
//! search and analysis.

use im::Vector;
use tracing::{debug, info};

use crate::core::{Move, Player, Position};
use crate::error::{EngineError, IllegalMoveError, InvariantViolation};
use crate::rules::{
    apply_move, evaluate_game_over, generate_moves, DrawClock, DrawReason, GameOver, WinReason,
};
use crate::variant::{BoardTopology, Variant};

/// One game in progress (or finished).
#[derive(Clone, Debug)]
pub struct GameSession {
    variant: Variant,
    topology: &'static BoardTopology,
    position: Position,
    legal_moves: Vec<Move>,
    history: Vector<Position>,
    clock: DrawClock,
    game_over: Option<GameOver>,
}

impl GameSession {
    /// A new game of `variant` from the empty board.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let topology = variant.topology();
        let position = Position::default();
        let legal_moves = generate_moves(&position, topology);
        let clock = DrawClock::new();
        let game_over = evaluate_game_over(&position, topology, &legal_moves, &clock);

        Self {
            variant,
            topology,
            position,
            legal_moves,
            history: Vector::unit(position),
            clock,
            game_over,
        }
    }

    /// A game of `variant` starting from an arbitrary position.
    ///
    /// The position is validated first; draw clocks start empty, so
    /// repetitions and quiet plies before `position` are forgotten.
    pub fn with_position(variant: Variant, position: Position) -> Result<Self, InvariantViolation> {
        let mut session = Self::new(variant);
        session.reset(position)?;
        Ok(session)
    }

    /// The variant this session plays.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The current position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The current position in text notation.
    #[must_use]
    pub fn position_string(&self) -> String {
        self.position.to_string()
    }

    /// The legal moves in the current position.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Every position reached so far, oldest first, starting position
    /// included.
    #[must_use]
    pub fn history(&self) -> &Vector<Position> {
        &self.history
    }

    /// The terminal result, if the game is over.
    #[must_use]
    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    /// Whether `mv` is legal right now.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.game_over.is_none() && self.legal_moves.contains(&mv)
    }

    /// Play `mv`, advancing the session to the resulting position.
    ///
    /// Rejected without side effects when the game is already over or
    /// `mv` is not in the generated legal set.
    pub fn try_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if !self.is_legal(mv) {
            return Err(IllegalMoveError { mv });
        }

        let next = apply_move(&self.position, mv);
        self.clock.record(&next, mv.is_advancement());
        self.history.push_back(next);
        self.position = next;
        self.legal_moves = generate_moves(&next, self.topology);
        self.game_over = evaluate_game_over(&next, self.topology, &self.legal_moves, &self.clock);

        debug!(%mv, position = %next, "move played");
        if let Some(result) = self.game_over {
            self.legal_moves.clear();
            info!(?result, "game over");
        }
        Ok(())
    }

    /// Parse and play a move in text notation.
    pub fn play_move_str(&mut self, text: &str) -> Result<Move, EngineError> {
        let mv: Move = text.parse()?;
        self.try_move(mv)?;
        Ok(mv)
    }

    /// Restart the session from `position`.
    ///
    /// History, clocks and any terminal result are discarded; the game
    /// is live again from the given position (which may itself be
    /// immediately terminal, e.g. a blocked setup).
    pub fn reset(&mut self, position: Position) -> Result<(), InvariantViolation> {
        position.validate(self.variant)?;

        self.position = position;
        self.legal_moves = generate_moves(&position, self.topology);
        self.history = Vector::unit(position);
        self.clock.reset();
        self.game_over =
            evaluate_game_over(&position, self.topology, &self.legal_moves, &self.clock);
        if self.game_over.is_some() {
            self.legal_moves.clear();
        }

        debug!(position = %position, "session reset");
        Ok(())
    }

    /// Record that `player` resigned. Ignored once the game is over.
    pub fn resign(&mut self, player: Player) {
        self.end_externally(GameOver::Winner {
            winner: player.opponent(),
            reason: WinReason::Resignation,
        });
    }

    /// Record that `player`'s clock ran out. Ignored once the game is
    /// over.
    pub fn timeout(&mut self, player: Player) {
        self.end_externally(GameOver::Winner {
            winner: player.opponent(),
            reason: WinReason::Timeout,
        });
    }

    /// Record an accepted draw offer. Ignored once the game is over.
    pub fn accept_draw_offer(&mut self) {
        self.end_externally(GameOver::Draw {
            reason: DrawReason::Agreement,
        });
    }

    fn end_externally(&mut self, result: GameOver) {
        if self.game_over.is_none() {
            self.game_over = Some(result);
            self.legal_moves.clear();
            info!(?result, "game ended externally");
        }
    }
}
