use super::*;
use crate::board::piece::PieceKind;
use crate::chess_position;
use common::square::*;

#[test]
fn test_god_mode_finds_scholars_mate() {
    // 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6
    let mut board = chess_position! {
        r.bqkb.r
        pppp.ppp
        ..n..n..
        ....p..Q
        ..B.P...
        ........
        PPPP.PPP
        RNB.K.NR
    };
    let before = board.clone();
    let mut searcher = Searcher::new(Some(1));

    let chess_move = searcher
        .search(&mut board, Color::White, Difficulty::GodMode)
        .unwrap();
    assert_eq!((H5, F7), (chess_move.from_square(), chess_move.to_square()));
    assert_eq!(before, board);
}

#[test]
fn test_extreme_finds_mate_in_one() {
    let mut board = chess_position! {
        ........
        ........
        ........
        .....K.k
        ........
        ........
        ........
        ......R.
    };
    let mut searcher = Searcher::new(Some(1));

    let chess_move = searcher
        .search(&mut board, Color::White, Difficulty::Extreme)
        .unwrap();
    assert_eq!((G1, H1), (chess_move.from_square(), chess_move.to_square()));
}

#[test]
fn test_hard_takes_valuable_capture() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ...r....
        ........
        ........
        ........
        ...QK...
    };
    let before = board.clone();
    let mut searcher = Searcher::new(Some(1));

    let chess_move = searcher
        .search(&mut board, Color::White, Difficulty::Hard)
        .unwrap();
    assert_eq!((D1, D5), (chess_move.from_square(), chess_move.to_square()));
    assert_eq!(before, board);
}

#[test]
fn test_god_mode_defends_against_back_rank_mate() {
    let mut board = chess_position! {
        r...k...
        ........
        ........
        ........
        ........
        ........
        .....PPP
        ......K.
    };
    let mut searcher = Searcher::new(Some(1));

    let chess_move = searcher
        .search(&mut board, Color::White, Difficulty::GodMode)
        .unwrap();
    let mut after = board.clone();
    after.make_move(&chess_move).unwrap();
    let threatened =
        mate_search::threatens_mate_in_one(&mut after, &MoveGenerator::new(), Color::Black);
    assert!(!threatened.unwrap());
}

#[test]
fn test_medium_develops_a_knight_from_the_start() {
    let mut board = Board::starting_position();
    let mut searcher = Searcher::new(Some(3));

    let chess_move = searcher
        .search(&mut board, Color::White, Difficulty::Medium)
        .unwrap();
    assert_eq!(PieceKind::Knight, chess_move.piece().kind);
}

#[test]
fn test_extreme_search_leaves_board_untouched() {
    let mut board = Board::starting_position();
    let before = board.clone();
    let mut searcher = Searcher::new(Some(5));

    let chess_move = searcher
        .search(&mut board, Color::White, Difficulty::Extreme)
        .unwrap();
    assert!(searcher.searched_position_count() > 0);
    assert_eq!(Color::White, chess_move.piece().color);
    assert_eq!(before, board);
}

#[test]
fn test_god_mode_searches_quiet_position() {
    // No checks, captures or motifs are available, so only alpha-beta can
    // choose the move.
    let mut board = chess_position! {
        ....k...
        pppp....
        ........
        ........
        ........
        ........
        ....PPPP
        ....K...
    };
    let before = board.clone();
    let mut searcher = Searcher::new(Some(7));

    let chess_move = searcher
        .search(&mut board, Color::White, Difficulty::GodMode)
        .unwrap();
    assert_eq!(Color::White, chess_move.piece().color);
    assert!(searcher.searched_position_count() > 0);
    assert_eq!(before, board);
}

#[test]
fn test_seeded_searchers_agree() {
    let mut board = Board::starting_position();
    let mut first = Searcher::new(Some(99));
    let mut second = Searcher::new(Some(99));

    for _ in 0..5 {
        let a = first.search(&mut board, Color::Black, Difficulty::Easy).unwrap();
        let b = second.search(&mut board, Color::Black, Difficulty::Easy).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_no_available_moves() {
    let mut board = chess_position! {
        k.......
        ..Q.....
        .K......
        ........
        ........
        ........
        ........
        ........
    };
    let mut searcher = Searcher::new(None);

    for difficulty in Difficulty::ALL.iter() {
        let result = searcher.search(&mut board, Color::Black, *difficulty);
        assert!(matches!(result, Err(SearchError::NoAvailableMoves)));
    }
}
