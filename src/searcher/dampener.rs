//! Repetition dampener: keeps one piece from monopolising the candidate list.

use rustc_hash::FxHashMap;

use common::Square;

use crate::board::piece::PieceKind;
use crate::chess_move::ChessMove;
use crate::move_generator::ChessMoveList;

/// Groups candidates by moving piece kind and origin square and keeps at most
/// `max(2, candidates / 4)` moves per group, preserving the input order. The
/// first move of every group always survives, so the result is never empty
/// unless the input is.
pub fn dampen_repetition(candidates: &[ChessMove]) -> ChessMoveList {
    let per_piece = (candidates.len() / 4).max(2);
    let mut seen: FxHashMap<(PieceKind, Square), usize> = FxHashMap::default();

    candidates
        .iter()
        .filter(|chess_move| {
            let count = seen
                .entry((chess_move.piece().kind, chess_move.from_square()))
                .or_insert(0);
            *count += 1;
            *count <= per_piece
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board::Board;
    use crate::chess_position;
    use crate::move_generator::MoveGenerator;
    use common::square::*;

    #[test]
    fn test_caps_moves_per_piece() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ...Q....
            ........
            P.......
            ....K...
        };
        let candidates = MoveGenerator::new().generate_moves(&mut board, Color::White);
        let dampened = dampen_repetition(&candidates);

        let per_piece = (candidates.len() / 4).max(2);
        let queen_moves = dampened.iter().filter(|m| m.from_square() == D4).count();
        assert_eq!(per_piece, queen_moves);
        // The lone pawn keeps both of its moves.
        assert_eq!(2, dampened.iter().filter(|m| m.from_square() == A2).count());
    }

    #[test]
    fn test_never_empties_a_non_empty_list() {
        let mut board = Board::starting_position();
        let candidates = MoveGenerator::new().generate_moves(&mut board, Color::White);
        let dampened = dampen_repetition(&candidates);
        // Every piece has at most two moves, so nothing is dropped.
        assert_eq!(candidates.len(), dampened.len());

        let single = [candidates[0]];
        assert_eq!(1, dampen_repetition(&single).len());
        assert!(dampen_repetition(&[]).is_empty());
    }
}
