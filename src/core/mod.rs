//! Core data model: players, board nodes, moves, positions.

pub mod moves;
pub mod node;
pub mod player;
pub mod position;

pub use moves::Move;
pub use node::{Node, NODE_COUNT};
pub use player::Player;
pub use position::{Board, Phase, Position};
