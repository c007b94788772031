//! Making and unmaking moves.
//!
//! `Board::make_move` returns an `Undo` record holding everything needed to
//! restore the pre-move state exactly; `Board::unmake_move` consumes it. Both the
//! game controller and the speculative `Trial` guard go through this path.

use common::Square;

use super::castle_rights::CastleRights;
use super::color::Color;
use super::error::BoardError;
use super::piece::{Piece, PieceKind};
use super::Board;
use crate::chess_move::{CastleSide, ChessMove};

/// State captured before a move is made.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Undo {
    captured: Option<(Square, Piece)>,
    rook_move: Option<(Square, Square)>,
    turn: Color,
    kings: [Option<Square>; 2],
    castle_rights: [CastleRights; 2],
    en_passant_target: Option<Square>,
    move_count: u16,
}

impl Undo {
    /// The piece removed by the move and the square it stood on.
    pub fn captured(&self) -> Option<(Square, Piece)> {
        self.captured
    }
}

impl Board {
    /// Plays `chess_move` on the board. All preconditions are checked before any
    /// square is touched, so an `Err` leaves the board unchanged.
    ///
    /// Does not check legality and does not record captured pieces; see
    /// `Board::apply` for the bookkeeping variant.
    pub fn make_move(&mut self, chess_move: &ChessMove) -> Result<Undo, BoardError> {
        let from = chess_move.from_square();
        let to = chess_move.to_square();
        let piece = chess_move.piece();
        let color = piece.color;

        match self.get(from) {
            None => return Err(BoardError::EmptySquare { square: from }),
            Some(p) if p != piece => return Err(BoardError::PieceMismatch { square: from }),
            _ => (),
        }

        let captured = match chess_move.capture_square() {
            Some(square) => match self.get(square) {
                Some(victim) if victim.color != color && victim.kind != PieceKind::King => {
                    Some((square, victim))
                }
                _ => return Err(BoardError::PieceMismatch { square }),
            },
            None => match self.get(to) {
                None => None,
                Some(_) => return Err(BoardError::PieceMismatch { square: to }),
            },
        };

        let rook_move = match chess_move.castle_side() {
            Some(side) => {
                let row = from.row();
                let rook_from = Square::new(row, side.rook_from_col());
                let rook_to = Square::new(row, side.rook_to_col());
                if self.get(rook_from) != Some(Piece::new(PieceKind::Rook, color))
                    || self.is_occupied(rook_to)
                {
                    return Err(BoardError::PieceMismatch { square: rook_from });
                }
                Some((rook_from, rook_to))
            }
            None => None,
        };

        let undo = Undo {
            captured,
            rook_move,
            turn: self.turn,
            kings: self.kings,
            castle_rights: self.castle_rights,
            en_passant_target: self.en_passant_target,
            move_count: self.move_count,
        };

        if let Some((square, _)) = captured {
            self.set(square, None);
        }
        self.set(from, None);
        let placed = if piece.kind == PieceKind::Pawn && to.row() == color.promotion_row() {
            let kind = chess_move.promotes_to().unwrap_or(PieceKind::Queen);
            Piece::new(kind, color)
        } else {
            piece
        };
        self.set(to, Some(placed));

        if let Some((rook_from, rook_to)) = rook_move {
            let rook = self.set(rook_from, None);
            self.set(rook_to, rook);
        }

        if piece.kind == PieceKind::King {
            self.kings[color.index()] = Some(to);
        }

        self.update_castle_rights(piece, from, captured);
        self.en_passant_target = if piece.kind == PieceKind::Pawn
            && (to.row() as i8 - from.row() as i8).abs() == 2
        {
            Some(Square::new((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

        self.turn = color.opposite();
        self.move_count += 1;

        Ok(undo)
    }

    /// Reverts a move made by `make_move`. Must be called with the `Undo` that
    /// `make_move` returned for the same move, on the board it produced.
    pub fn unmake_move(&mut self, chess_move: &ChessMove, undo: Undo) {
        let from = chess_move.from_square();
        let to = chess_move.to_square();

        if let Some((rook_from, rook_to)) = undo.rook_move {
            let rook = self.set(rook_to, None);
            self.set(rook_from, rook);
        }
        self.set(to, None);
        self.set(from, Some(chess_move.piece()));
        if let Some((square, victim)) = undo.captured {
            self.set(square, Some(victim));
        }

        self.turn = undo.turn;
        self.kings = undo.kings;
        self.castle_rights = undo.castle_rights;
        self.en_passant_target = undo.en_passant_target;
        self.move_count = undo.move_count;
    }

    /// Makes the move and records any captured piece. Returns the captured piece.
    pub fn apply(&mut self, chess_move: &ChessMove) -> Result<Option<Piece>, BoardError> {
        let undo = self.make_move(chess_move)?;
        let captured = undo.captured().map(|(_, piece)| piece);
        if let Some(piece) = captured {
            self.captured[piece.color.index()].push(piece);
        }
        Ok(captured)
    }

    /// Rights only ever shrink here: a king move clears both sides, a rook
    /// leaving its corner clears that side, and a rook captured on its corner
    /// clears the opponent's side.
    fn update_castle_rights(
        &mut self,
        piece: Piece,
        from: Square,
        captured: Option<(Square, Piece)>,
    ) {
        let color = piece.color;
        match piece.kind {
            PieceKind::King => self.castle_rights[color.index()] = CastleRights::none(),
            PieceKind::Rook => self.lose_corner_right(color, from),
            _ => (),
        }
        if let Some((square, victim)) = captured {
            if victim.kind == PieceKind::Rook {
                self.lose_corner_right(victim.color, square);
            }
        }
    }

    fn lose_corner_right(&mut self, color: Color, square: Square) {
        if square.row() != color.home_row() {
            return;
        }
        let rights = &mut self.castle_rights[color.index()];
        match CastleSide::from_rook_col(square.col()) {
            Some(CastleSide::Kingside) => rights.kingside = false,
            Some(CastleSide::Queenside) => rights.queenside = false,
            None => (),
        }
    }
}
