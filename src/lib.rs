pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod searcher;

pub use common::Square;
