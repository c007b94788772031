use super::*;
use crate::chess_move::{CastleSide, ChessMove};
use crate::chess_position;
use common::square::*;

fn piece(kind: PieceKind, color: Color) -> Piece {
    Piece::new(kind, color)
}

#[test]
fn test_starting_position() {
    let board = Board::starting_position();
    assert_eq!(Some(piece(PieceKind::Rook, Color::Black)), board.get(A8));
    assert_eq!(Some(piece(PieceKind::Queen, Color::White)), board.get(D1));
    assert_eq!(Some(piece(PieceKind::Pawn, Color::Black)), board.get(E7));
    assert_eq!(None, board.get(E4));
    assert_eq!(Some(E1), board.king_square(Color::White));
    assert_eq!(Some(E8), board.king_square(Color::Black));
    assert_eq!(Color::White, board.turn());
    assert_eq!(CastleRights::all(), board.castle_rights(Color::Black));
    assert_eq!(16, board.pieces(Color::White).count());
    assert!(board.validate().is_ok());
}

#[test]
fn test_put_and_remove_track_kings() {
    let mut board = Board::new();
    let king = piece(PieceKind::King, Color::White);
    board.put(E1, king).unwrap();
    assert_eq!(Some(E1), board.king_square(Color::White));
    assert_eq!(
        Err(BoardError::SquareOccupied { square: E1 }),
        board.put(E1, piece(PieceKind::Queen, Color::White))
    );

    assert_eq!(Some(king), board.remove(E1));
    assert_eq!(None, board.king_square(Color::White));
    assert_eq!(None, board.remove(E1));
}

#[test]
fn test_validate_requires_one_king_each() {
    let missing = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ........
    };
    assert!(matches!(
        missing.validate(),
        Err(BoardError::InvariantViolation { .. })
    ));

    let doubled = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ...KK...
    };
    assert!(doubled.validate().is_err());
}

#[test]
fn test_make_and_unmake_double_pawn_push() {
    let mut board = Board::starting_position();
    let before = board.clone();
    let pawn = piece(PieceKind::Pawn, Color::White);
    let chess_move = ChessMove::new(E2, E4, pawn, None);

    let undo = board.make_move(&chess_move).unwrap();
    assert_eq!(None, board.get(E2));
    assert_eq!(Some(pawn), board.get(E4));
    assert_eq!(Some(E3), board.en_passant_target());
    assert_eq!(Color::Black, board.turn());
    assert_eq!(1, board.move_count());

    board.unmake_move(&chess_move, undo);
    assert_eq!(before, board);
}

#[test]
fn test_en_passant_target_clears_after_one_move() {
    let mut board = Board::starting_position();
    let white_pawn = piece(PieceKind::Pawn, Color::White);
    let black_knight = piece(PieceKind::Knight, Color::Black);
    board.make_move(&ChessMove::new(D2, D4, white_pawn, None)).unwrap();
    board.make_move(&ChessMove::new(G8, F6, black_knight, None)).unwrap();
    assert_eq!(None, board.en_passant_target());
}

#[test]
fn test_apply_records_captured_piece() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ...n....
        ....P...
        ........
        ........
        ....K...
    };
    let pawn = piece(PieceKind::Pawn, Color::White);
    let knight = piece(PieceKind::Knight, Color::Black);

    let captured = board.apply(&ChessMove::new(E4, D5, pawn, Some(knight))).unwrap();
    assert_eq!(Some(knight), captured);
    assert_eq!(&[knight], board.captured_pieces(Color::Black));
    assert!(board.captured_pieces(Color::White).is_empty());
}

#[test]
fn test_castling_relocates_rook_and_unmakes() {
    let mut board = chess_position! {
        r...k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    board.set_turn(Color::Black);
    board.set_castle_rights(Color::Black, CastleRights::all());
    let before = board.clone();

    let king = piece(PieceKind::King, Color::Black);
    let castle = ChessMove::castle(E8, king, CastleSide::Queenside);
    let undo = board.make_move(&castle).unwrap();
    assert_eq!(Some(king), board.get(C8));
    assert_eq!(Some(piece(PieceKind::Rook, Color::Black)), board.get(D8));
    assert_eq!(None, board.get(A8));
    assert_eq!(Some(C8), board.king_square(Color::Black));
    assert!(board.castle_rights(Color::Black).is_empty());

    board.unmake_move(&castle, undo);
    assert_eq!(before, board);
}

#[test]
fn test_promotion_places_a_queen() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ......p.
        ....K...
    };
    let pawn = piece(PieceKind::Pawn, Color::Black);
    let promotion = ChessMove::new(G2, G1, pawn, None).with_promotion(PieceKind::Queen);

    let before = board.clone();
    let undo = board.make_move(&promotion).unwrap();
    assert_eq!(Some(piece(PieceKind::Queen, Color::Black)), board.get(G1));
    board.unmake_move(&promotion, undo);
    assert_eq!(before, board);
    assert_eq!(Some(pawn), board.get(G2));
}

#[test]
fn test_failed_make_move_leaves_board_unchanged() {
    let mut board = Board::starting_position();
    let before = board.clone();
    let knight = piece(PieceKind::Knight, Color::White);

    // The destination holds a friendly pawn.
    let result = board.make_move(&ChessMove::new(G1, E2, knight, None));
    assert_eq!(Err(BoardError::PieceMismatch { square: E2 }), result.map(|_| ()));
    // The origin is empty.
    let result = board.make_move(&ChessMove::new(G3, F5, knight, None));
    assert_eq!(Err(BoardError::EmptySquare { square: G3 }), result.map(|_| ()));
    assert_eq!(before, board);
}

#[test]
fn test_display() {
    let board = Board::starting_position();
    let ascii = board.to_ascii();
    assert!(ascii.starts_with("8 rnbqkbnr\n"));
    assert!(ascii.ends_with("  abcdefgh\n"));
    assert!(board.to_string().ends_with("white to move"));
}
