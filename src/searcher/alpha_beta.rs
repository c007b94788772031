//! Alpha-beta search shared by the searching difficulty tiers.
//!
//! # Profiles
//!
//! One search routine serves every tier; a `SearchProfile` picks the depth,
//! how many candidates are explored at each ply, which evaluator scores the
//! leaves, how replies are ordered, and how many single-ply extensions a line
//! may take. Extensions are granted when the move reaching the horizon gives
//! check or captures a rook or better.
//!
//! # Scores
//!
//! Scores are always from the searching color's point of view. A leaf scores
//! the move that reached it with the profile's evaluator from the mover's
//! side, negated when the mover is the opponent. Mates score
//! `MATE_SCORE + remaining depth`, so quicker mates rank higher. Stalemate is
//! zero.
//!
//! Every explored move goes through `Trial`, so the board is restored on
//! every exit path, pruning cutoffs and errors included.

use std::cmp::Reverse;

use log::trace;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::PieceKind;
use crate::board::{Board, Trial};
use crate::chess_move::ChessMove;
use crate::evaluate::heuristics::{gives_check, quick_evaluate};
use crate::evaluate::{Evaluator, EvaluatorKind};
use crate::move_generator::{ChessMoveList, MoveGenerator};

use super::heuristic::captured_value;

pub const MATE_SCORE: i32 = 1_000_000;

const INFINITY: i32 = i32::MAX;

/// Captures of at least this value extend the search at the horizon.
const EXTENSION_CAPTURE_VALUE: i32 = 5;

const TACTICAL_CAPTURE_WEIGHT: i32 = 100;
const TACTICAL_CHECK_BONUS: i32 = 80;
const TACTICAL_DEVELOPMENT_BONUS: i32 = 60;

/// How replies are ranked before the best `breadth` of them are searched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOrdering {
    /// `quick_evaluate`.
    Quick,
    /// Captures first, then checks, then pieces leaving their home rank.
    Tactical,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchProfile {
    /// Reply plies below the candidate move. The deepest reply is scored,
    /// not expanded.
    pub depth: u8,
    pub breadth: usize,
    pub evaluator: EvaluatorKind,
    pub ordering: MoveOrdering,
    pub max_extensions: u8,
}

pub struct AlphaBetaSearch<'a> {
    move_generator: &'a MoveGenerator,
    profile: SearchProfile,
    color: Color,
    searched_position_count: usize,
}

impl<'a> AlphaBetaSearch<'a> {
    pub fn new(move_generator: &'a MoveGenerator, profile: SearchProfile) -> Self {
        Self {
            move_generator,
            profile,
            color: Color::White,
            searched_position_count: 0,
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Searches the `breadth` best candidates by `quick_evaluate` and returns
    /// the first one reaching the highest score, with that score. `None` when
    /// there are no candidates.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        candidates: &[ChessMove],
    ) -> Result<Option<(ChessMove, i32)>, BoardError> {
        let color = match candidates.first() {
            Some(chess_move) => chess_move.piece().color,
            None => return Ok(None),
        };
        self.color = color;
        self.searched_position_count = 0;

        let ranked = self.rank(board, candidates, MoveOrdering::Quick)?;
        let depth = self.profile.depth;

        let mut alpha = -INFINITY;
        let mut best = None;
        for chess_move in ranked.iter() {
            let score = self.search(board, chess_move, depth, false, alpha, INFINITY, 0)?;
            trace!("{} scored {}", chess_move, score);
            if score > alpha {
                alpha = score;
                best = Some((*chess_move, score));
            }
        }
        Ok(best)
    }

    /// Scores the position reached by `chess_move`. `maximizing` is true when
    /// the searching color moves next.
    #[allow(clippy::too_many_arguments)]
    fn search(
        &mut self,
        board: &mut Board,
        chess_move: &ChessMove,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        extensions: u8,
    ) -> Result<i32, BoardError> {
        self.searched_position_count += 1;

        let (depth, extensions) = if depth > 0 {
            (depth, extensions)
        } else if extensions < self.profile.max_extensions && self.extends(board, chess_move)? {
            (1, extensions + 1)
        } else {
            return self.leaf(board, chess_move);
        };

        let next = chess_move.piece().color.opposite();
        let mut trial = Trial::new(board, chess_move)?;
        let replies = self.move_generator.generate_moves(&mut trial, next);

        if replies.is_empty() {
            if !self.move_generator.is_in_check(&trial, next) {
                return Ok(0);
            }
            let mate = MATE_SCORE + i32::from(depth);
            return Ok(if next == self.color { -mate } else { mate });
        }

        let replies = self.rank(&mut trial, &replies, self.profile.ordering)?;

        if maximizing {
            let mut best = -INFINITY;
            for reply in replies.iter() {
                let score =
                    self.search(&mut trial, reply, depth - 1, false, alpha, beta, extensions)?;
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = INFINITY;
            for reply in replies.iter() {
                let score =
                    self.search(&mut trial, reply, depth - 1, true, alpha, beta, extensions)?;
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }

    fn leaf(&self, board: &mut Board, chess_move: &ChessMove) -> Result<i32, BoardError> {
        let score = self
            .profile
            .evaluator
            .evaluate(board, self.move_generator, chess_move)?;
        if chess_move.piece().color == self.color {
            Ok(score)
        } else {
            Ok(-score)
        }
    }

    fn extends(&self, board: &mut Board, chess_move: &ChessMove) -> Result<bool, BoardError> {
        if captured_value(chess_move) >= EXTENSION_CAPTURE_VALUE {
            return Ok(true);
        }
        gives_check(board, self.move_generator, chess_move)
    }

    /// The `breadth` best moves under `ordering`, highest first. Equal keys
    /// keep generation order.
    fn rank(
        &self,
        board: &mut Board,
        moves: &[ChessMove],
        ordering: MoveOrdering,
    ) -> Result<ChessMoveList, BoardError> {
        let mut keyed = Vec::with_capacity(moves.len());
        for chess_move in moves {
            let key = match ordering {
                MoveOrdering::Quick => quick_evaluate(chess_move),
                MoveOrdering::Tactical => self.tactical_order(board, chess_move)?,
            };
            keyed.push((key, *chess_move));
        }
        keyed.sort_by_key(|&(key, _)| Reverse(key));

        Ok(keyed
            .into_iter()
            .take(self.profile.breadth)
            .map(|(_, chess_move)| chess_move)
            .collect())
    }

    fn tactical_order(&self, board: &mut Board, chess_move: &ChessMove) -> Result<i32, BoardError> {
        let mut key = captured_value(chess_move) * TACTICAL_CAPTURE_WEIGHT;
        if gives_check(board, self.move_generator, chess_move)? {
            key += TACTICAL_CHECK_BONUS;
        }
        let piece = chess_move.piece();
        if piece.kind != PieceKind::Pawn && chess_move.from_square().row() == piece.color.home_row()
        {
            key += TACTICAL_DEVELOPMENT_BONUS;
        }
        Ok(key)
    }
}
