//! # morris-engine
//!
//! A deterministic rules engine for the mill game family (Nine and
//! Twelve Men's Morris).
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Move generation, state transition, and game-over
//!    detection are pure functions of `(Position, Variant)`. No hidden
//!    state, no randomness, no I/O.
//!
//! 2. **Values Over Handles**: A [`Position`] is a `Copy` value; search
//!    and analysis code clones freely. The stateful [`GameSession`]
//!    exists for hosts (UIs, servers) and is built entirely on the pure
//!    layer.
//!
//! 3. **Variant By Data**: The two supported boards differ only in
//!    their topology tables and piece allotments; every rule reads the
//!    shared [`BoardTopology`], never a variant-specific code path.
//!
//! ## Modules
//!
//! - `core`: Players, nodes, moves, positions
//! - `variant`: Variant selection and board topology tables
//! - `rules`: Move generation, transitions, draw clocks, game over
//! - `notation`: Text codecs for coordinates, moves, positions
//! - `session`: Stateful per-game driver
//! - `error`: Typed parse and rule errors

pub mod core;
pub mod error;
pub mod notation;
pub mod rules;
pub mod session;
pub mod variant;

// Re-export commonly used types
pub use crate::core::{Board, Move, Node, Phase, Player, Position, NODE_COUNT};

pub use crate::variant::{BoardTopology, Variant};

pub use crate::rules::{
    apply_move, evaluate_game_over, generate_moves, DrawClock, DrawReason, GameOver, WinReason,
    FIFTY_MOVE_RULE_PLIES,
};

pub use crate::notation::{coord, node_from_coord};

pub use crate::session::GameSession;

pub use crate::error::{EngineError, IllegalMoveError, InvariantViolation, ParseError};
