use std::ops::{Deref, DerefMut};

use super::error::BoardError;
use super::make_unmake::Undo;
use super::Board;
use crate::chess_move::ChessMove;

/// A speculative move on a borrowed board. The move is made when the guard is
/// created and unmade when it is dropped, so every exit path of the caller,
/// early returns and `?` included, restores the board exactly.
///
/// While the guard is alive the board is reachable through `Deref`/`DerefMut`,
/// which lets trials nest by re-borrowing: `Trial::new(&mut trial, &reply)`.
pub struct Trial<'a> {
    board: &'a mut Board,
    chess_move: ChessMove,
    undo: Undo,
}

impl<'a> Trial<'a> {
    pub fn new(board: &'a mut Board, chess_move: &ChessMove) -> Result<Self, BoardError> {
        let undo = board.make_move(chess_move)?;
        Ok(Self {
            board,
            chess_move: *chess_move,
            undo,
        })
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(&self.chess_move, self.undo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board::piece::{Piece, PieceKind};
    use common::square::*;

    fn try_nested(
        board: &mut Board,
        first: &ChessMove,
        second: &ChessMove,
    ) -> Result<(), BoardError> {
        let mut trial = Trial::new(board, first)?;
        let _inner = Trial::new(&mut trial, second)?;
        Err(BoardError::InvariantViolation {
            msg: "early exit".to_string(),
        })
    }

    #[test]
    fn test_trial_restores_board_on_drop() {
        let mut board = Board::starting_position();
        let before = board.clone();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        {
            let trial = Trial::new(&mut board, &ChessMove::new(E2, E4, pawn, None)).unwrap();
            assert_eq!(Some(pawn), trial.get(E4));
            assert_eq!(Some(E3), trial.en_passant_target());
            assert_eq!(Color::Black, trial.turn());
        }
        assert_eq!(before, board);
    }

    #[test]
    fn test_nested_trials_restore_on_early_return() {
        let mut board = Board::starting_position();
        let before = board.clone();
        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        let black_knight = Piece::new(PieceKind::Knight, Color::Black);
        let result = try_nested(
            &mut board,
            &ChessMove::new(D2, D4, white_pawn, None),
            &ChessMove::new(G8, F6, black_knight, None),
        );
        assert!(result.is_err());
        assert_eq!(before, board);
    }

    #[test]
    fn test_failed_trial_leaves_board_untouched() {
        let mut board = Board::starting_position();
        let before = board.clone();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(Trial::new(&mut board, &ChessMove::new(E2, E4, rook, None)).is_err());
        assert_eq!(before, board);
    }
}
