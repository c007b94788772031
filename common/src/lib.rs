//! Coordinate primitives shared by the engine crate and its benchmarks.

pub mod square;

pub use square::Square;
