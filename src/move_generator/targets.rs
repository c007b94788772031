//! Piece geometry: step offsets, ray directions and attack detection.

use common::Square;
use smallvec::SmallVec;

use crate::board::piece::PieceKind;
use crate::board::Board;

pub type Offset = (i8, i8);

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [Offset; 8] = KING_OFFSETS;

/// Ray directions for a sliding piece, empty for everything else.
pub fn ray_directions(kind: PieceKind) -> &'static [Offset] {
    match kind {
        PieceKind::Rook => &ORTHOGONAL_DIRECTIONS,
        PieceKind::Bishop => &DIAGONAL_DIRECTIONS,
        PieceKind::Queen => &ALL_DIRECTIONS,
        _ => &[],
    }
}

/// Whether a slider of `kind` moves along the line described by `direction`.
pub fn slides_along(kind: PieceKind, direction: Offset) -> bool {
    let diagonal = direction.0 != 0 && direction.1 != 0;
    if diagonal {
        kind.moves_diagonally()
    } else {
        kind.moves_orthogonally()
    }
}

/// Returns true iff the piece on `from` could capture on `to`, ignoring check
/// and ignoring what (if anything) stands on `to`. Pawns attack diagonally
/// forward only.
pub fn attacks(board: &Board, from: Square, to: Square) -> bool {
    let piece = match board.get(from) {
        Some(piece) => piece,
        None => return false,
    };
    if from == to {
        return false;
    }

    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::Pawn => d_row == piece.color.pawn_direction() && d_col.abs() == 1,
        PieceKind::Knight => {
            (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2)
        }
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Rook => (d_row == 0 || d_col == 0) && is_path_clear(board, from, to),
        PieceKind::Bishop => d_row.abs() == d_col.abs() && is_path_clear(board, from, to),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
                && is_path_clear(board, from, to)
        }
    }
}

/// True if every square strictly between `from` and `to` is empty. The squares
/// must share a rank, file or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    let steps = d_row.abs().max(d_col.abs());
    let step = (d_row.signum(), d_col.signum());

    (1..steps).all(|i| match from.offset(step.0 * i, step.1 * i) {
        Some(square) => !board.is_occupied(square),
        None => false,
    })
}

/// Every square the piece on `square` attacks, respecting blockers. The first
/// occupied square along a ray is included.
pub fn attacked_squares(board: &Board, square: Square) -> SmallVec<[Square; 32]> {
    let mut targets = SmallVec::new();
    let piece = match board.get(square) {
        Some(piece) => piece,
        None => return targets,
    };

    match piece.kind {
        PieceKind::Pawn => {
            let d_row = piece.color.pawn_direction();
            targets.extend([-1, 1].iter().filter_map(|&d_col| square.offset(d_row, d_col)));
        }
        PieceKind::Knight => {
            targets.extend(KNIGHT_OFFSETS.iter().filter_map(|&(r, c)| square.offset(r, c)));
        }
        PieceKind::King => {
            targets.extend(KING_OFFSETS.iter().filter_map(|&(r, c)| square.offset(r, c)));
        }
        kind => {
            for &direction in ray_directions(kind) {
                walk_ray(board, square, direction, |target, _| {
                    targets.push(target);
                });
            }
        }
    }

    targets
}

/// Walks from `origin` (exclusive) in `direction`, calling `visit` on each
/// square until the board edge or the first occupied square, which is visited
/// and then stops the walk.
pub fn walk_ray<F>(board: &Board, origin: Square, direction: Offset, mut visit: F)
where
    F: FnMut(Square, bool),
{
    let mut current = origin.offset(direction.0, direction.1);
    while let Some(square) = current {
        let occupied = board.is_occupied(square);
        visit(square, occupied);
        if occupied {
            break;
        }
        current = square.offset(direction.0, direction.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::square::*;

    #[test]
    fn test_rook_attack_is_blocked() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            R..p...r
            ........
            ........
            ....K...
        };
        assert!(attacks(&board, A4, D4));
        assert!(!attacks(&board, A4, H4));
        assert!(attacks(&board, H4, D4));
        assert!(attacks(&board, A4, A8));
    }

    #[test]
    fn test_pawn_attacks_forward_diagonals_only() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ...P....
            ....K...
        };
        assert!(attacks(&board, D2, C3));
        assert!(attacks(&board, D2, E3));
        assert!(!attacks(&board, D2, D3));
        assert!(!attacks(&board, D2, C1));
    }

    #[test]
    fn test_attacked_squares_include_first_blocker() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ..p.....
            ........
            B...K...
        };
        let squares = attacked_squares(&board, A1);
        assert_eq!(squares.as_slice(), &[B2, C3]);
    }
}
