use core::fmt;

use common::Square;

use crate::board::piece::{Piece, PieceKind};

use super::castle::CastleSide;

/// Special-move annotations carried alongside the from/to pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct MoveFlags {
    pub is_en_passant: bool,
    pub castle: Option<CastleSide>,
    pub promotes_to: Option<PieceKind>,
}

/// A move produced by the move generator. Immutable once created; the
/// captured piece is recorded at generation time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    from_square: Square,
    to_square: Square,
    piece: Piece,
    captured: Option<Piece>,
    flags: MoveFlags,
}

impl ChessMove {
    pub fn new(
        from_square: Square,
        to_square: Square,
        piece: Piece,
        captured: Option<Piece>,
    ) -> Self {
        Self {
            from_square,
            to_square,
            piece,
            captured,
            flags: MoveFlags::default(),
        }
    }

    pub fn en_passant(
        from_square: Square,
        to_square: Square,
        piece: Piece,
        captured_pawn: Piece,
    ) -> Self {
        Self {
            flags: MoveFlags {
                is_en_passant: true,
                ..MoveFlags::default()
            },
            ..Self::new(from_square, to_square, piece, Some(captured_pawn))
        }
    }

    pub fn castle(king_from: Square, king: Piece, side: CastleSide) -> Self {
        let king_to = Square::new(king_from.row(), side.king_to_col());
        Self {
            flags: MoveFlags {
                castle: Some(side),
                ..MoveFlags::default()
            },
            ..Self::new(king_from, king_to, king, None)
        }
    }

    pub fn with_promotion(mut self, promote_to: PieceKind) -> Self {
        self.flags.promotes_to = Some(promote_to);
        self
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn captures(&self) -> Option<Piece> {
        self.captured
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn flags(&self) -> MoveFlags {
        self.flags
    }

    pub fn is_en_passant(&self) -> bool {
        self.flags.is_en_passant
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        self.flags.castle
    }

    pub fn promotes_to(&self) -> Option<PieceKind> {
        self.flags.promotes_to
    }

    /// Where the captured piece actually stands. For en passant this is the
    /// square behind the destination, on the capturing pawn's own row.
    pub fn capture_square(&self) -> Option<Square> {
        self.captured?;
        if self.flags.is_en_passant {
            Some(Square::new(self.from_square.row(), self.to_square.col()))
        } else {
            Some(self.to_square)
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = &self.flags;
        let move_type = match (flags.castle, flags.is_en_passant, flags.promotes_to) {
            (Some(_), _, _) => "Castle",
            (_, true, _) => "En Passant",
            (_, _, Some(_)) => "Promote to Queen",
            _ => "Move",
        };
        let capture = match self.captured {
            Some(piece) => format!(" capturing {}", piece),
            None => "".to_string(),
        };
        write!(
            f,
            "{} {}{}{}",
            move_type, self.from_square, self.to_square, capture
        )
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
