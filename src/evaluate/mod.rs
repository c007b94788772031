use crate::board::color::Color;
use crate::board::Board;
use crate::move_generator::MoveGenerator;

pub mod evaluator;
pub mod heuristics;
pub mod piece_values;
pub mod tactics;

pub use evaluator::{Evaluator, EvaluatorKind, PositionalEvaluator, StandardEvaluator};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

#[inline(always)]
pub fn current_player_is_in_check(board: &Board, move_generator: &MoveGenerator) -> bool {
    player_is_in_check(board, move_generator, board.turn())
}

#[inline(always)]
pub fn player_is_in_check(board: &Board, move_generator: &MoveGenerator, player: Color) -> bool {
    move_generator.is_in_check(board, player)
}

#[inline(always)]
pub fn player_is_in_checkmate(
    board: &mut Board,
    move_generator: &MoveGenerator,
    player: Color,
) -> bool {
    player_is_in_check(board, move_generator, player)
        && !move_generator.has_legal_moves(board, player)
}

/// Returns the game ending state if `current_turn` has no legal move,
/// otherwise returns None.
pub fn game_ending(
    board: &mut Board,
    move_generator: &MoveGenerator,
    current_turn: Color,
) -> Option<GameEnding> {
    if move_generator.has_legal_moves(board, current_turn) {
        return None;
    }

    if player_is_in_check(board, move_generator, current_turn) {
        Some(GameEnding::Checkmate)
    } else {
        Some(GameEnding::Stalemate)
    }
}
