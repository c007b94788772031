//! Tactical motif detection: forks, discovered attacks and skewers.

use common::Square;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::{Board, Trial};
use crate::chess_move::ChessMove;
use crate::move_generator::targets::{
    attacked_squares, ray_directions, slides_along, ALL_DIRECTIONS,
};

use super::piece_values::material_value;

const DISCOVERED_ATTACK_WEIGHT: i32 = 30;
const SKEWER_WEIGHT: i32 = 40;

/// Points for each enemy piece exposed by a discovered line.
const DISCOVERY_POINTS: i32 = 25;

/// Combined motif score of playing `chess_move`. Zero when the move sets up
/// no tactic.
pub fn tactical_score(board: &mut Board, chess_move: &ChessMove) -> Result<i32, BoardError> {
    let color = chess_move.piece().color;
    let trial = Trial::new(board, chess_move)?;

    Ok(fork_score(&trial, chess_move.to_square(), color)
        + discovered_attack_score(&trial, chess_move.from_square(), color)
            * DISCOVERED_ATTACK_WEIGHT
        + skewer_score(&trial, chess_move.to_square(), color) * SKEWER_WEIGHT)
}

/// The piece on `square` attacking two or more enemy pieces at once.
pub fn fork_score(board: &Board, square: Square, color: Color) -> i32 {
    let targets: Vec<i32> = attacked_squares(board, square)
        .iter()
        .filter_map(|&target| board.get(target))
        .filter(|piece| piece.color != color)
        .map(|piece| material_value(piece.kind))
        .collect();

    if targets.len() < 2 {
        return 0;
    }
    targets.len() as i32 * 50 + targets.iter().sum::<i32>() * 10
}

/// Lines through the vacated square `from` that now connect a friendly slider
/// to an enemy piece.
pub fn discovered_attack_score(board: &Board, from: Square, color: Color) -> i32 {
    let mut score = 0;
    for &direction in &ALL_DIRECTIONS {
        let behind = first_piece(board, from, direction);
        let slider = match behind {
            Some((_, piece)) => piece,
            None => continue,
        };
        if slider.color != color || !slides_along(slider.kind, direction) {
            continue;
        }

        let opposite = (-direction.0, -direction.1);
        if let Some((_, target)) = first_piece(board, from, opposite) {
            if target.color != color {
                score += DISCOVERY_POINTS;
            }
        }
    }
    score
}

/// A slider on `square` lined up with two enemy pieces in a row.
pub fn skewer_score(board: &Board, square: Square, color: Color) -> i32 {
    let slider = match board.get(square) {
        Some(piece) if piece.kind.is_slider() => piece,
        _ => return 0,
    };

    let mut score = 0;
    for &direction in ray_directions(slider.kind) {
        let (front_square, front) = match first_piece(board, square, direction) {
            Some(found) => found,
            None => continue,
        };
        if front.color == color {
            continue;
        }
        if let Some((_, back)) = first_piece(board, front_square, direction) {
            if back.color != color {
                score += material_value(front.kind).min(material_value(back.kind)) * 15;
            }
        }
    }
    score
}

fn first_piece(
    board: &Board,
    origin: Square,
    direction: (i8, i8),
) -> Option<(Square, Piece)> {
    let mut current = origin.offset(direction.0, direction.1);
    while let Some(square) = current {
        if let Some(piece) = board.get(square) {
            return Some((square, piece));
        }
        current = square.offset(direction.0, direction.1);
    }
    None
}
