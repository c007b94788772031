//! Forced-mate search.
//!
//! Short mates are searched exhaustively; longer ones only consider checking
//! moves on the attacker's plies:
//!
//! - mate-in-1 and mate-in-2: every legal attacker move is tried
//! - mate-in-3: checks only, which keeps branching manageable
//!
//! On the defender's plies every legal reply is always tried. All lines are
//! explored with `Trial`, so the board is restored on every exit path.

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::{Board, Trial};
use crate::chess_move::ChessMove;
use crate::evaluate::heuristics::gives_check;
use crate::evaluate::player_is_in_checkmate;
use crate::move_generator::MoveGenerator;

/// Longest mate the exhaustive passes look for, in moves of the attacker.
const EXHAUSTIVE_MATE_LENGTH: u8 = 2;

/// Returns the first candidate forcing mate in at most `max_moves` moves,
/// preferring shorter mates.
pub fn find_forced_mate(
    board: &mut Board,
    move_generator: &MoveGenerator,
    candidates: &[ChessMove],
    max_moves: u8,
) -> Result<Option<ChessMove>, BoardError> {
    for moves in 1..=max_moves {
        let checks_only = moves > EXHAUSTIVE_MATE_LENGTH;
        for chess_move in candidates {
            if checks_only && !gives_check(board, move_generator, chess_move)? {
                continue;
            }
            if leads_to_mate(board, move_generator, chess_move, moves, checks_only)? {
                return Ok(Some(*chess_move));
            }
        }
    }
    Ok(None)
}

/// Whether playing `chess_move` mates within `moves` moves of its mover
/// against every defence.
pub fn leads_to_mate(
    board: &mut Board,
    move_generator: &MoveGenerator,
    chess_move: &ChessMove,
    moves: u8,
    checks_only: bool,
) -> Result<bool, BoardError> {
    let attacker = chess_move.piece().color;
    let defender = attacker.opposite();
    let mut trial = Trial::new(board, chess_move)?;

    if moves <= 1 {
        return Ok(player_is_in_checkmate(&mut trial, move_generator, defender));
    }

    let replies = move_generator.generate_moves(&mut trial, defender);
    if replies.is_empty() {
        return Ok(move_generator.is_in_check(&trial, defender));
    }

    for reply in replies.iter() {
        let mut after_reply = Trial::new(&mut trial, reply)?;
        let follow_ups = move_generator.generate_moves(&mut after_reply, attacker);

        let mut refuted = true;
        for follow_up in follow_ups.iter() {
            if checks_only && !gives_check(&mut after_reply, move_generator, follow_up)? {
                continue;
            }
            if leads_to_mate(&mut after_reply, move_generator, follow_up, moves - 1, checks_only)? {
                refuted = false;
                break;
            }
        }
        if refuted {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether `color` could mate immediately if it were its turn.
pub fn threatens_mate_in_one(
    board: &mut Board,
    move_generator: &MoveGenerator,
    color: Color,
) -> Result<bool, BoardError> {
    let moves = move_generator.generate_moves(board, color);
    for chess_move in moves.iter() {
        if leads_to_mate(board, move_generator, chess_move, 1, false)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// When the opponent of `color` threatens mate in one, returns the first
/// candidate after which no such threat remains.
pub fn find_mate_defense(
    board: &mut Board,
    move_generator: &MoveGenerator,
    candidates: &[ChessMove],
    color: Color,
) -> Result<Option<ChessMove>, BoardError> {
    let opponent = color.opposite();
    if !threatens_mate_in_one(board, move_generator, opponent)? {
        return Ok(None);
    }

    for chess_move in candidates {
        let mut trial = Trial::new(board, chess_move)?;
        if !threatens_mate_in_one(&mut trial, move_generator, opponent)? {
            return Ok(Some(*chess_move));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Piece, PieceKind};
    use crate::chess_position;
    use common::square::*;

    #[test]
    fn test_find_mate_in_one() {
        let mut board = chess_position! {
            ......k.
            .....ppp
            ........
            ........
            ........
            ........
            ........
            R...K...
        };
        let move_generator = MoveGenerator::new();
        let before = board.clone();
        let candidates = move_generator.generate_moves(&mut board, Color::White);
        let mate = find_forced_mate(&mut board, &move_generator, &candidates, 1)
            .unwrap()
            .unwrap();
        assert_eq!((A1, A8), (mate.from_square(), mate.to_square()));
        assert_eq!(before, board);
    }

    #[test]
    fn test_find_mate_in_two() {
        // Rook ladder: 1. Rb7 cuts off the seventh rank, 2. Ra8# follows.
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            .R......
            R...K...
        };
        let move_generator = MoveGenerator::new();
        let candidates = move_generator.generate_moves(&mut board, Color::White);
        assert_eq!(
            None,
            find_forced_mate(&mut board, &move_generator, &candidates, 1).unwrap()
        );
        let mate = find_forced_mate(&mut board, &move_generator, &candidates, 2)
            .unwrap()
            .unwrap();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(rook, mate.piece());
        assert!(leads_to_mate(&mut board, &move_generator, &mate, 2, false).unwrap());
    }

    #[test]
    fn test_stalemate_is_not_mate() {
        let mut board = chess_position! {
            k.......
            ........
            .K......
            ........
            ........
            ........
            ........
            ..Q.....
        };
        let move_generator = MoveGenerator::new();
        let queen = Piece::new(PieceKind::Queen, Color::White);
        let stalemating = ChessMove::new(C1, C7, queen, None);
        assert!(!leads_to_mate(&mut board, &move_generator, &stalemating, 1, false).unwrap());
        assert!(!leads_to_mate(&mut board, &move_generator, &stalemating, 2, false).unwrap());
    }

    #[test]
    fn test_defends_against_back_rank_mate() {
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
        board.set_turn(Color::White);
        let move_generator = MoveGenerator::new();
        assert!(threatens_mate_in_one(&mut board, &move_generator, Color::Black).unwrap());

        let candidates = move_generator.generate_moves(&mut board, Color::White);
        let defense = find_mate_defense(&mut board, &move_generator, &candidates, Color::White)
            .unwrap()
            .unwrap();
        let mut after = board.clone();
        after.make_move(&defense).unwrap();
        assert!(!threatens_mate_in_one(&mut after, &move_generator, Color::Black).unwrap());
    }
}
