//! Cheap per-move heuristics shared by every difficulty tier.

use common::Square;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::PieceKind;
use crate::board::{Board, Trial};
use crate::chess_move::ChessMove;
use crate::move_generator::MoveGenerator;

use super::piece_values::material_value;

pub const CENTER_SQUARES: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];

const DEVELOPMENT_BONUS: i32 = 20;

pub fn is_center_square(square: Square) -> bool {
    CENTER_SQUARES.contains(&square)
}

/// A knight, bishop, rook or queen stepping off its home rank.
pub fn is_development_move(chess_move: &ChessMove) -> bool {
    let piece = chess_move.piece();
    let home = piece.color.home_row();
    matches!(
        piece.kind,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
    ) && chess_move.from_square().row() == home
        && chess_move.to_square().row() != home
}

/// 12 on the four centre squares, falling to 0 in the corners.
pub fn centrality(square: Square) -> i32 {
    let row_distance = (2 * square.row() as i32 - 7).abs();
    let col_distance = (2 * square.col() as i32 - 7).abs();
    14 - (row_distance + col_distance)
}

/// Pre-ranking score used to pick which candidates get searched deeply.
pub fn quick_evaluate(chess_move: &ChessMove) -> i32 {
    let mut score = 0;
    if let Some(captured) = chess_move.captures() {
        score += material_value(captured.kind) * 10;
    }
    score += centrality(chess_move.to_square());

    let piece = chess_move.piece();
    if piece.kind != PieceKind::Pawn && chess_move.from_square().row() == piece.color.home_row() {
        score += DEVELOPMENT_BONUS;
    }
    score
}

/// Whether the piece of `color` standing on `square` can be won: either an
/// enemy piece of lower or equal value attacks it, or it is attacked at all
/// and no other friendly piece defends it.
pub fn is_square_dangerous(
    board: &Board,
    move_generator: &MoveGenerator,
    square: Square,
    color: Color,
) -> bool {
    let value = match board.get(square) {
        Some(piece) => material_value(piece.kind),
        None => return false,
    };

    let attackers = move_generator.attackers(board, square, color.opposite());
    if attackers.is_empty() {
        return false;
    }
    if attackers
        .iter()
        .any(|(_, attacker)| material_value(attacker.kind) <= value)
    {
        return true;
    }
    !move_generator.is_square_attacked(board, square, color)
}

/// Plays the move speculatively and applies `is_square_dangerous` to its
/// destination.
pub fn is_move_dangerous(
    board: &mut Board,
    move_generator: &MoveGenerator,
    chess_move: &ChessMove,
) -> Result<bool, BoardError> {
    let trial = Trial::new(board, chess_move)?;
    Ok(is_square_dangerous(
        &trial,
        move_generator,
        chess_move.to_square(),
        chess_move.piece().color,
    ))
}

pub fn gives_check(
    board: &mut Board,
    move_generator: &MoveGenerator,
    chess_move: &ChessMove,
) -> Result<bool, BoardError> {
    let trial = Trial::new(board, chess_move)?;
    Ok(move_generator.is_in_check(&trial, chess_move.piece().color.opposite()))
}
