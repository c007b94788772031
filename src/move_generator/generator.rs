//! Move generation implementation.
//!
//! Pseudo-legal moves are produced per piece by mailbox geometry. Legality is
//! decided by playing each candidate inside a `Trial` and asking whether the
//! mover's king is attacked afterwards.

use log::error;
use smallvec::SmallVec;

use common::Square;

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::{Board, Trial};
use crate::chess_move::{CastleSide, ChessMove};

use super::targets::{self, ray_directions, walk_ray, KING_OFFSETS, KNIGHT_OFFSETS};

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

/// Pieces attacking a square, with the squares they attack from.
pub type Attackers = SmallVec<[(Square, Piece); 8]>;

/// Generates moves and answers attack queries for a given board state.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Every geometrically valid move for the piece on `square`, ignoring
    /// whether it leaves the mover's own king in check.
    pub fn pseudo_moves(&self, board: &Board, square: Square) -> ChessMoveList {
        match board.get(square) {
            Some(piece) => piece_moves(self, board, square, piece),
            None => ChessMoveList::new(),
        }
    }

    /// Whether the piece on `from` could capture on `to`.
    pub fn attacks(&self, board: &Board, from: Square, to: Square) -> bool {
        targets::attacks(board, from, to)
    }

    pub fn is_square_attacked(&self, board: &Board, square: Square, by: Color) -> bool {
        board
            .pieces(by)
            .any(|(from, _)| targets::attacks(board, from, square))
    }

    pub fn attackers(&self, board: &Board, square: Square, by: Color) -> Attackers {
        board
            .pieces(by)
            .filter(|(from, _)| targets::attacks(board, *from, square))
            .collect()
    }

    pub fn is_in_check(&self, board: &Board, color: Color) -> bool {
        match board.king_square(color) {
            Some(king) => self.is_square_attacked(board, king, color.opposite()),
            None => false,
        }
    }

    /// Plays the move speculatively and reports whether the mover's king is
    /// safe afterwards. A move the board rejects is never legal.
    pub fn is_legal(&self, board: &mut Board, chess_move: &ChessMove) -> bool {
        let color = chess_move.piece().color;
        match Trial::new(board, chess_move) {
            Ok(trial) => !self.is_in_check(&trial, color),
            Err(err) => {
                error!("rejected candidate {}: {}", chess_move, err);
                false
            }
        }
    }

    pub fn legal_moves(&self, board: &mut Board, square: Square) -> ChessMoveList {
        let mut moves = self.pseudo_moves(board, square);
        moves.retain(|chess_move| self.is_legal(board, chess_move));
        moves
    }

    /// All legal moves for `color`, in row-major order of the moving pieces.
    pub fn generate_moves(&self, board: &mut Board, color: Color) -> ChessMoveList {
        let origins: SmallVec<[Square; 16]> =
            board.pieces(color).map(|(square, _)| square).collect();
        let mut moves = ChessMoveList::new();
        for square in origins {
            moves.extend(self.legal_moves(board, square));
        }
        moves
    }

    pub fn has_legal_moves(&self, board: &mut Board, color: Color) -> bool {
        let origins: SmallVec<[Square; 16]> =
            board.pieces(color).map(|(square, _)| square).collect();
        origins
            .into_iter()
            .any(|square| !self.legal_moves(board, square).is_empty())
    }

    /// Number of leaf positions reachable in exactly `depth` plies from the
    /// side to move.
    pub fn count_positions(&self, depth: u8, board: &mut Board) -> usize {
        if depth == 0 {
            return 1;
        }

        let turn = board.turn();
        let candidates = self.generate_moves(board, turn);
        if depth == 1 {
            return candidates.len();
        }

        let mut count = 0;
        for chess_move in candidates.iter() {
            match Trial::new(board, chess_move) {
                Ok(mut trial) => count += self.count_positions(depth - 1, &mut trial),
                Err(err) => error!("position counting skipped {}: {}", chess_move, err),
            }
        }
        count
    }
}

/// A destination is reachable when it is empty or holds a capturable enemy.
/// Kings are never captured; attacks on them are reported as check instead.
fn capturable(board: &Board, square: Square, color: Color) -> Option<Option<Piece>> {
    match board.get(square) {
        None => Some(None),
        Some(piece) if piece.color != color && piece.kind != PieceKind::King => Some(Some(piece)),
        Some(_) => None,
    }
}

fn pawn_moves(board: &Board, square: Square, pawn: Piece, moves: &mut ChessMoveList) {
    let color = pawn.color;
    let direction = color.pawn_direction();
    let promote = |chess_move: ChessMove| {
        if chess_move.to_square().row() == color.promotion_row() {
            chess_move.with_promotion(PieceKind::Queen)
        } else {
            chess_move
        }
    };

    if let Some(one_step) = square.offset(direction, 0) {
        if !board.is_occupied(one_step) {
            moves.push(promote(ChessMove::new(square, one_step, pawn, None)));

            if square.row() == color.pawn_start_row() {
                if let Some(two_step) = square.offset(2 * direction, 0) {
                    if !board.is_occupied(two_step) {
                        moves.push(ChessMove::new(square, two_step, pawn, None));
                    }
                }
            }
        }
    }

    for &d_col in &[-1, 1] {
        let target = match square.offset(direction, d_col) {
            Some(target) => target,
            None => continue,
        };

        match board.get(target) {
            Some(victim) if victim.color != color && victim.kind != PieceKind::King => {
                moves.push(promote(ChessMove::new(square, target, pawn, Some(victim))));
            }
            None if board.en_passant_target() == Some(target) => {
                let behind = Square::new(square.row(), target.col());
                if let Some(victim) = board.get(behind) {
                    if victim.kind == PieceKind::Pawn && victim.color != color {
                        moves.push(ChessMove::en_passant(square, target, pawn, victim));
                    }
                }
            }
            _ => (),
        }
    }
}

fn step_moves(
    board: &Board,
    square: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut ChessMoveList,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = square.offset(d_row, d_col) {
            if let Some(captured) = capturable(board, target, piece.color) {
                moves.push(ChessMove::new(square, target, piece, captured));
            }
        }
    }
}

fn sliding_moves(board: &Board, square: Square, piece: Piece, moves: &mut ChessMoveList) {
    for &direction in ray_directions(piece.kind) {
        walk_ray(board, square, direction, |target, _| {
            if let Some(captured) = capturable(board, target, piece.color) {
                moves.push(ChessMove::new(square, target, piece, captured));
            }
        });
    }
}

/// Castling candidates: the right is held, the rook is on its corner, the
/// squares between king and rook are empty, the king is not in check, and no
/// square the king stands on or crosses is attacked.
fn castle_moves(
    move_generator: &MoveGenerator,
    board: &Board,
    square: Square,
    king: Piece,
    moves: &mut ChessMoveList,
) {
    let color = king.color;
    let home = color.home_row();
    if square != Square::new(home, 4) {
        return;
    }
    let rights = board.castle_rights(color);
    if rights.is_empty() {
        return;
    }

    let enemy = color.opposite();
    if move_generator.is_square_attacked(board, square, enemy) {
        return;
    }

    for side in CastleSide::ALL.iter().copied() {
        let held = match side {
            CastleSide::Kingside => rights.kingside,
            CastleSide::Queenside => rights.queenside,
        };
        if !held {
            continue;
        }

        let rook_square = Square::new(home, side.rook_from_col());
        if board.get(rook_square) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let path_is_empty = side
            .between_cols()
            .iter()
            .all(|&col| !board.is_occupied(Square::new(home, col)));
        if !path_is_empty {
            continue;
        }

        let path_is_safe = side
            .king_path_cols()
            .iter()
            .all(|&col| !move_generator.is_square_attacked(board, Square::new(home, col), enemy));
        if path_is_safe {
            moves.push(ChessMove::castle(square, king, side));
        }
    }
}

fn piece_moves(
    move_generator: &MoveGenerator,
    board: &Board,
    square: Square,
    piece: Piece,
) -> ChessMoveList {
    let mut moves = ChessMoveList::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, square, piece, &mut moves),
        PieceKind::Knight => step_moves(board, square, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => {
            step_moves(board, square, piece, &KING_OFFSETS, &mut moves);
            castle_moves(move_generator, board, square, piece, &mut moves);
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliding_moves(board, square, piece, &mut moves)
        }
    }
    moves
}
