//! The non-searching tiers: uniform random choice and the ordered heuristic.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::board::error::BoardError;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::heuristics::{is_center_square, is_development_move, is_move_dangerous};
use crate::evaluate::piece_values::material_value;
use crate::move_generator::MoveGenerator;

pub fn captured_value(chess_move: &ChessMove) -> i32 {
    chess_move
        .captures()
        .map(|piece| material_value(piece.kind))
        .unwrap_or(0)
}

/// Highest captured value first, then the cheapest capturing piece. The first
/// of equally ranked moves wins.
pub fn best_capture(moves: &[ChessMove]) -> Option<ChessMove> {
    moves
        .iter()
        .min_by_key(|chess_move| {
            (
                -captured_value(chess_move),
                material_value(chess_move.piece().kind),
            )
        })
        .copied()
}

pub fn random_move(moves: &[ChessMove], rng: &mut StdRng) -> Option<ChessMove> {
    moves.choose(rng).copied()
}

/// Prefers, in order: safe captures, captures that win at least as much as
/// they risk, safe developing moves, safe moves into the centre, any safe
/// move, and finally anything at all.
pub fn heuristic_move(
    board: &mut Board,
    move_generator: &MoveGenerator,
    candidates: &[ChessMove],
    rng: &mut StdRng,
) -> Result<Option<ChessMove>, BoardError> {
    let mut safe = Vec::with_capacity(candidates.len());
    for chess_move in candidates {
        if !is_move_dangerous(board, move_generator, chess_move)? {
            safe.push(*chess_move);
        }
    }

    let safe_captures: Vec<ChessMove> = safe.iter().filter(|m| m.is_capture()).copied().collect();
    if let Some(chess_move) = best_capture(&safe_captures) {
        return Ok(Some(chess_move));
    }

    let even_trades: Vec<ChessMove> = candidates
        .iter()
        .filter(|m| m.is_capture() && captured_value(m) >= material_value(m.piece().kind))
        .copied()
        .collect();
    if let Some(chess_move) = best_capture(&even_trades) {
        return Ok(Some(chess_move));
    }

    let development: Vec<ChessMove> = safe
        .iter()
        .filter(|m| is_development_move(m))
        .copied()
        .collect();
    if let Some(chess_move) = random_move(&development, rng) {
        return Ok(Some(chess_move));
    }

    let central: Vec<ChessMove> = safe
        .iter()
        .filter(|m| is_center_square(m.to_square()))
        .copied()
        .collect();
    if let Some(chess_move) = random_move(&central, rng) {
        return Ok(Some(chess_move));
    }

    if let Some(chess_move) = random_move(&safe, rng) {
        return Ok(Some(chess_move));
    }

    Ok(random_move(candidates, rng))
}
