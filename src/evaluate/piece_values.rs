use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::Board;

pub fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Material of `color` minus material of its opponent. Kings are left out
/// since both sides always have exactly one.
pub fn material_balance(board: &Board, color: Color) -> i32 {
    let side_total = |side: Color| -> i32 {
        board
            .pieces(side)
            .filter(|(_, piece)| piece.kind != PieceKind::King)
            .map(|(_, piece)| material_value(piece.kind))
            .sum()
    };
    side_total(color) - side_total(color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(0, material_balance(&board, Color::White));
        assert_eq!(0, material_balance(&board, Color::Black));
    }

    #[test]
    fn test_material_balance_is_antisymmetric() {
        let board = chess_position! {
            ....k...
            pp......
            ........
            ........
            ........
            ........
            ........
            R...K...
        };
        assert_eq!(3, material_balance(&board, Color::White));
        assert_eq!(-3, material_balance(&board, Color::Black));
    }
}
