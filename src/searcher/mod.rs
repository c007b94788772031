//! Move selection for the automated opponent.
//!
//! Each difficulty tier is a strategy over the same dampened candidate list.
//! A tier that errors or finds nothing hands over to the next weaker tier, so
//! a search only fails when the side to move has no legal moves at all.

pub mod alpha_beta;
pub mod dampener;
pub mod heuristic;
pub mod mate_search;

#[cfg(test)]
mod tests;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::heuristics::{gives_check, is_move_dangerous};
use crate::evaluate::tactics::tactical_score;
use crate::game::difficulty::Difficulty;
use crate::move_generator::MoveGenerator;

use alpha_beta::AlphaBetaSearch;
use dampener::dampen_repetition;
use heuristic::{best_capture, captured_value, heuristic_move, random_move};
use mate_search::{find_forced_mate, find_mate_defense};

/// Captures at least this valuable are taken outright by the hard tier.
const HARD_CAPTURE_VALUE: i32 = 3;
/// Captures at least this valuable are taken outright by the extreme tier.
const EXTREME_CAPTURE_VALUE: i32 = 5;

const EXTREME_MATE_LENGTH: u8 = 1;
const GOD_MODE_MATE_LENGTH: u8 = 3;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error(transparent)]
    Board(#[from] BoardError),
}

pub struct Searcher {
    move_generator: MoveGenerator,
    rng: StdRng,
    searched_position_count: usize,
}

impl Searcher {
    /// A searcher with a reproducible random stream when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            move_generator: MoveGenerator::new(),
            rng,
            searched_position_count: 0,
        }
    }

    /// Positions visited by the alpha-beta stage of the last search.
    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Chooses a move for `color` without applying it. The board is left as
    /// it was found.
    pub fn search(
        &mut self,
        board: &mut Board,
        color: Color,
        difficulty: Difficulty,
    ) -> Result<ChessMove, SearchError> {
        self.searched_position_count = 0;

        let legal = self.move_generator.generate_moves(board, color);
        if legal.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }
        let candidates = dampen_repetition(&legal);
        debug!(
            "{} has {} legal moves, {} after dampening",
            color,
            legal.len(),
            candidates.len()
        );

        let mut tier = Some(difficulty);
        while let Some(current) = tier {
            match self.search_tier(board, &candidates, current) {
                Ok(Some(chess_move)) => {
                    info!("{} tier chose {}", current, chess_move);
                    return Ok(chess_move);
                }
                Ok(None) => debug!("{} tier found no move", current),
                Err(err) => warn!("{} tier failed: {}", current, err),
            }
            tier = current.fallback();
        }

        // The easy tier only returns `None` for an empty candidate list, and
        // dampening never empties a non-empty one.
        Err(SearchError::NoAvailableMoves)
    }

    fn search_tier(
        &mut self,
        board: &mut Board,
        candidates: &[ChessMove],
        difficulty: Difficulty,
    ) -> Result<Option<ChessMove>, SearchError> {
        match difficulty {
            Difficulty::Easy => Ok(random_move(candidates, &mut self.rng)),
            Difficulty::Medium => {
                heuristic_move(board, &self.move_generator, candidates, &mut self.rng)
                    .map_err(SearchError::from)
            }
            Difficulty::Hard => self.hard(board, candidates),
            Difficulty::Extreme => self.extreme(board, candidates),
            Difficulty::GodMode => self.god_mode(board, candidates),
        }
    }

    fn hard(
        &mut self,
        board: &mut Board,
        candidates: &[ChessMove],
    ) -> Result<Option<ChessMove>, SearchError> {
        let captures: Vec<ChessMove> = candidates
            .iter()
            .filter(|m| m.is_capture())
            .copied()
            .collect();
        if let Some(capture) = best_capture(&captures) {
            if captured_value(&capture) >= HARD_CAPTURE_VALUE {
                return Ok(Some(capture));
            }
        }
        self.alpha_beta(board, candidates, Difficulty::Hard)
    }

    fn extreme(
        &mut self,
        board: &mut Board,
        candidates: &[ChessMove],
    ) -> Result<Option<ChessMove>, SearchError> {
        if let Some(mate) =
            find_forced_mate(board, &self.move_generator, candidates, EXTREME_MATE_LENGTH)?
        {
            debug!("found mate in {}: {}", EXTREME_MATE_LENGTH, mate);
            return Ok(Some(mate));
        }

        let mut checks = Vec::new();
        for chess_move in candidates {
            if gives_check(board, &self.move_generator, chess_move)? {
                checks.push(*chess_move);
            }
        }
        if let Some(check) = best_capture(&checks) {
            return Ok(Some(check));
        }

        let big_captures: Vec<ChessMove> = candidates
            .iter()
            .filter(|m| captured_value(m) >= EXTREME_CAPTURE_VALUE)
            .copied()
            .collect();
        if let Some(capture) = best_capture(&big_captures) {
            return Ok(Some(capture));
        }

        self.alpha_beta(board, candidates, Difficulty::Extreme)
    }

    fn god_mode(
        &mut self,
        board: &mut Board,
        candidates: &[ChessMove],
    ) -> Result<Option<ChessMove>, SearchError> {
        if let Some(mate) =
            find_forced_mate(board, &self.move_generator, candidates, GOD_MODE_MATE_LENGTH)?
        {
            debug!("found forced mate: {}", mate);
            return Ok(Some(mate));
        }

        let color = match candidates.first() {
            Some(chess_move) => chess_move.piece().color,
            None => return Ok(None),
        };
        if let Some(defense) = find_mate_defense(board, &self.move_generator, candidates, color)? {
            debug!("defending against mate with {}", defense);
            return Ok(Some(defense));
        }

        let mut best_tactic: Option<(ChessMove, i32)> = None;
        for chess_move in candidates {
            if is_move_dangerous(board, &self.move_generator, chess_move)? {
                continue;
            }
            let score = tactical_score(board, chess_move)?;
            if score > 0 && best_tactic.map_or(true, |(_, best)| score > best) {
                best_tactic = Some((*chess_move, score));
            }
        }
        if let Some((tactic, score)) = best_tactic {
            debug!("playing tactic {} worth {}", tactic, score);
            return Ok(Some(tactic));
        }

        self.alpha_beta(board, candidates, Difficulty::GodMode)
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        candidates: &[ChessMove],
        difficulty: Difficulty,
    ) -> Result<Option<ChessMove>, SearchError> {
        let profile = match difficulty.search_profile() {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut search = AlphaBetaSearch::new(&self.move_generator, profile);
        let best = search.best_move(board, candidates)?;
        self.searched_position_count += search.searched_position_count();

        if let Some((chess_move, score)) = best {
            debug!(
                "alpha-beta picked {} with score {} after {} positions",
                chess_move,
                score,
                search.searched_position_count()
            );
        }
        Ok(best.map(|(chess_move, _)| chess_move))
    }
}
