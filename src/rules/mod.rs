//! The rules engine proper: legal-move generation, state transition,
//! draw bookkeeping, and game-over detection.
//!
//! Every function here is pure and synchronous; the single mutable value
//! is the [`crate::core::Position`] threaded explicitly through each
//! call. Hosts drive the cycle: generate, validate membership, apply,
//! record, evaluate.

pub mod apply;
pub mod game_over;
pub mod movegen;
pub mod repetition;

pub use apply::apply_move;
pub use game_over::{evaluate_game_over, DrawReason, GameOver, WinReason};
pub use movegen::generate_moves;
pub use repetition::{DrawClock, FIFTY_MOVE_RULE_PLIES};
