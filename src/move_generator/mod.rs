//! Chess move generation algorithms.

pub mod generator;
pub mod targets;

pub use generator::{Attackers, ChessMoveList, MoveGenerator};
