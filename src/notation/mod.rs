//! Text notation: the wire format shared with the UI, network peers,
//! and external engines.
//!
//! Three codecs, all strict and total where they claim to be:
//!
//! - node ↔ coordinate (`"a7"` .. `"g1"`), a bijection over the 24
//!   nodes;
//! - move ↔ `<to>`, `<to>x<capture>`, `<from>-<to>`,
//!   `<from>-<to>x<capture>`;
//! - position ↔ `<side>:<white-cells>:<black-cells>:<move-number>`,
//!   e.g. `w:wa1,d1:bg7,d2:4`.
//!
//! Parsing rejects malformed input with a typed
//! [`ParseError`](crate::error::ParseError); it never silently defaults.
//! [`Display`](std::fmt::Display) and [`FromStr`](std::str::FromStr)
//! implementations for [`Node`](crate::core::Node),
//! [`Move`](crate::core::Move) and [`Position`](crate::core::Position)
//! live here, next to the grammar they serialize.

pub mod coord;
pub mod moves;
pub mod position;

pub use coord::{coord, node_from_coord};
