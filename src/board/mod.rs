pub mod castle_rights;
pub mod color;
pub mod error;
pub mod piece;
pub mod trial;

mod display;
mod make_unmake;

use castle_rights::CastleRights;
use color::Color;
use common::Square;
use error::BoardError;
use piece::{Piece, PieceKind};

pub use make_unmake::Undo;
pub use trial::Trial;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The complete game state: the 8x8 grid plus side to move, tracked king
/// squares, castling rights, en passant target, captured pieces and move count.
///
/// `Clone` is a deep copy, so a cloned board can serve as an undo snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    turn: Color,
    kings: [Option<Square>; 2],
    castle_rights: [CastleRights; 2],
    en_passant_target: Option<Square>,
    captured: [Vec<Piece>; 2],
    move_count: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    /// An empty board with white to move and no castling rights.
    pub fn new() -> Self {
        Self {
            squares: [[None; 8]; 8],
            turn: Color::White,
            kings: [None; 2],
            castle_rights: [CastleRights::none(); 2],
            en_passant_target: None,
            captured: [Vec::new(), Vec::new()],
            move_count: 0,
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for color in Color::ALL.iter().copied() {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[home as usize][col] = Some(Piece::new(*kind, color));
                board.squares[pawns as usize][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
            board.kings[color.index()] = Some(Square::new(home, 4));
            board.castle_rights[color.index()] = CastleRights::all();
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied { square });
        }
        self.set(square, Some(piece));
        if piece.kind == PieceKind::King {
            self.kings[piece.color.index()] = Some(square);
        }
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square)?;
        self.set(square, None);
        if piece.kind == PieceKind::King && self.kings[piece.color.index()] == Some(square) {
            self.kings[piece.color.index()] = None;
        }
        Some(piece)
    }

    /// Raw square write. Does not maintain king tracking.
    fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    /// Every occupied square holding a piece of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    pub fn castle_rights(&self, color: Color) -> CastleRights {
        self.castle_rights[color.index()]
    }

    pub fn set_castle_rights(&mut self, color: Color, rights: CastleRights) {
        self.castle_rights[color.index()] = rights;
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// Pieces of `color` that have been captured so far.
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    /// Checks that exactly one king of each color is on the board and that the
    /// tracked king squares point at them.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL.iter().copied() {
            let kings: Vec<Square> = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .map(|(square, _)| square)
                .collect();
            if kings.len() != 1 {
                return Err(BoardError::InvariantViolation {
                    msg: format!("{} has {} kings", color, kings.len()),
                });
            }
            if self.king_square(color) != Some(kings[0]) {
                return Err(BoardError::InvariantViolation {
                    msg: format!("{} king is not on its tracked square", color),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
