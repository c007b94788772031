//! Move evaluators used at the leaves of the alpha-beta search.
//!
//! An evaluator scores a candidate move on the board it would be played on,
//! from the mover's point of view. The board is left exactly as it was found.

use common::Square;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::{Piece, PieceKind};
use crate::board::{Board, Trial};
use crate::chess_move::ChessMove;
use crate::move_generator::targets::{attacked_squares, KING_OFFSETS};
use crate::move_generator::MoveGenerator;

use super::heuristics::{is_center_square, is_development_move, is_square_dangerous, quick_evaluate};
use super::piece_values::{material_balance, material_value};

pub trait Evaluator {
    fn evaluate(
        &self,
        board: &mut Board,
        move_generator: &MoveGenerator,
        chess_move: &ChessMove,
    ) -> Result<i32, BoardError>;
}

/// Material after the move weighted by ten, plus the quick pre-ranking score,
/// minus a penalty when the moved piece can be won.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl Evaluator for StandardEvaluator {
    fn evaluate(
        &self,
        board: &mut Board,
        move_generator: &MoveGenerator,
        chess_move: &ChessMove,
    ) -> Result<i32, BoardError> {
        let piece = chess_move.piece();
        let to = chess_move.to_square();
        let trial = Trial::new(board, chess_move)?;

        let mut score = material_balance(&trial, piece.color) * 10;
        score += quick_evaluate(chess_move);
        if is_square_dangerous(&trial, move_generator, to, piece.color) {
            score -= moved_value(&trial, to) * 10;
        }
        Ok(score)
    }
}

const MATERIAL_WEIGHT: i32 = 30;
const TERRITORY_WEIGHT: i32 = 12;
const COORDINATION_WEIGHT: i32 = 10;
const KING_SAFETY_WEIGHT: i32 = 15;
const PRESSURE_WEIGHT: i32 = 8;
const INITIATIVE_WEIGHT: i32 = 6;
const DANGER_WEIGHT: i32 = 25;

const CASTLING_BONUS: i32 = 3;

/// The richer evaluator of the strongest tier.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalEvaluator;

impl Evaluator for PositionalEvaluator {
    fn evaluate(
        &self,
        board: &mut Board,
        move_generator: &MoveGenerator,
        chess_move: &ChessMove,
    ) -> Result<i32, BoardError> {
        let color = chess_move.piece().color;
        let to = chess_move.to_square();
        let trial = Trial::new(board, chess_move)?;

        let mut score = material_balance(&trial, color) * MATERIAL_WEIGHT;
        score += territorial_control(&trial, to) * TERRITORY_WEIGHT;
        score += coordination(&trial, move_generator, to, color) * COORDINATION_WEIGHT;
        score += king_safety(&trial, move_generator, chess_move) * KING_SAFETY_WEIGHT;
        score += pressure(&trial, to, color) * PRESSURE_WEIGHT;
        score += initiative(&trial, move_generator, chess_move) * INITIATIVE_WEIGHT;
        if is_square_dangerous(&trial, move_generator, to, color) {
            score -= moved_value(&trial, to) * DANGER_WEIGHT;
        }
        Ok(score)
    }
}

/// Selects an evaluator from a search profile.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EvaluatorKind {
    Standard,
    Positional,
}

impl Evaluator for EvaluatorKind {
    fn evaluate(
        &self,
        board: &mut Board,
        move_generator: &MoveGenerator,
        chess_move: &ChessMove,
    ) -> Result<i32, BoardError> {
        match self {
            EvaluatorKind::Standard => {
                StandardEvaluator.evaluate(board, move_generator, chess_move)
            }
            EvaluatorKind::Positional => {
                PositionalEvaluator.evaluate(board, move_generator, chess_move)
            }
        }
    }
}

fn moved_value(board: &Board, square: Square) -> i32 {
    board
        .get(square)
        .map(|piece| material_value(piece.kind))
        .unwrap_or(0)
}

/// Squares the moved piece attacks, with the centre counted twice.
fn territorial_control(board: &Board, square: Square) -> i32 {
    attacked_squares(board, square)
        .iter()
        .map(|&target| if is_center_square(target) { 2 } else { 1 })
        .sum()
}

/// Friendly pieces defending the destination.
fn coordination(
    board: &Board,
    move_generator: &MoveGenerator,
    square: Square,
    color: Color,
) -> i32 {
    move_generator.attackers(board, square, color).len() as i32
}

/// Friendly pieces around the king minus neighbouring squares the enemy
/// attacks, with a bonus for having castled.
fn king_safety(board: &Board, move_generator: &MoveGenerator, chess_move: &ChessMove) -> i32 {
    let color = chess_move.piece().color;
    let king = match board.king_square(color) {
        Some(king) => king,
        None => return 0,
    };

    let mut shield = 0;
    let mut exposure = 0;
    for &(d_row, d_col) in &KING_OFFSETS {
        let neighbour = match king.offset(d_row, d_col) {
            Some(neighbour) => neighbour,
            None => continue,
        };
        if matches!(board.get(neighbour), Some(piece) if piece.color == color) {
            shield += 1;
        }
        if move_generator.is_square_attacked(board, neighbour, color.opposite()) {
            exposure += 1;
        }
    }

    let castled = if chess_move.castle_side().is_some() {
        CASTLING_BONUS
    } else {
        0
    };
    shield - exposure + castled
}

/// Value of the enemy pieces the moved piece now attacks, kings aside.
fn pressure(board: &Board, square: Square, color: Color) -> i32 {
    attacked_squares(board, square)
        .iter()
        .filter_map(|&target| board.get(target))
        .filter(|piece| piece.color != color && piece.kind != PieceKind::King)
        .map(|piece: Piece| material_value(piece.kind))
        .sum()
}

fn initiative(board: &Board, move_generator: &MoveGenerator, chess_move: &ChessMove) -> i32 {
    let color = chess_move.piece().color;
    let mut score = 0;
    if move_generator.is_in_check(board, color.opposite()) {
        score += 5;
    }
    let row = chess_move.to_square().row();
    let in_enemy_half = match color {
        Color::White => row <= 3,
        Color::Black => row >= 4,
    };
    if in_enemy_half {
        score += 1;
    }
    if is_development_move(chess_move) {
        score += 2;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::square::*;

    #[test]
    fn test_standard_evaluator_rewards_winning_material() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ......q.
            ........
            .....N..
            ........
            ....K...
        };
        let move_generator = MoveGenerator::new();
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let queen = Piece::new(PieceKind::Queen, Color::Black);
        let before = board.clone();

        let capture = ChessMove::new(F3, G5, knight, Some(queen));
        let retreat = ChessMove::new(F3, G1, knight, None);
        let capture_score = StandardEvaluator
            .evaluate(&mut board, &move_generator, &capture)
            .unwrap();
        let retreat_score = StandardEvaluator
            .evaluate(&mut board, &move_generator, &retreat)
            .unwrap();
        assert!(capture_score > retreat_score);
        assert_eq!(before, board);
    }

    #[test]
    fn test_positional_evaluator_penalises_hanging_pieces() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ........
            ........
            ...N....
            ....K...
        };
        let move_generator = MoveGenerator::new();
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let hanging = ChessMove::new(D2, E4, knight, None);
        let safe = ChessMove::new(D2, F3, knight, None);
        let hanging_score = PositionalEvaluator
            .evaluate(&mut board, &move_generator, &hanging)
            .unwrap();
        let safe_score = PositionalEvaluator
            .evaluate(&mut board, &move_generator, &safe)
            .unwrap();
        assert!(safe_score > hanging_score);
    }

    #[test]
    fn test_territorial_control_counts_centre_twice() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ..N.....
            ........
            ....K...
        };
        // c3 knight: a2 a4 b1 b5 d1 d5 e2 e4, with d5 and e4 central.
        assert_eq!(10, territorial_control(&board, C3));
    }
}
