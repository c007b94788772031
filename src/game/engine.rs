use common::Square;
use log::{debug, error, info};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::{self, GameEnding};
use crate::move_generator::{ChessMoveList, MoveGenerator};
use crate::searcher::{SearchError, Searcher};

use super::difficulty::Difficulty;

/// Core engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub starting_position: Board,
    /// Seeds every random tie-break; `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::starting_position(),
            seed: None,
        }
    }
}

/// The live board plus one snapshot per applied move.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    board: Board,
    history: Vec<Board>,
}

impl GameState {
    fn new(starting_position: Board) -> Self {
        Self {
            board: starting_position,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::starting_position())
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    #[error("no move to undo")]
    EmptyHistory,
    #[error("{color} has no legal move")]
    NoLegalMove { color: Color },
    #[error("invalid position: {0}")]
    InvalidPosition(BoardError),
    #[error("search failed: {0}")]
    Search(SearchError),
}

/// What happened when a move was applied, seen from the side now to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub chess_move: ChessMove,
    pub captured: Option<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// The game controller: owns the game state, validates and applies moves,
/// keeps the undo history, and asks the searcher for automated moves.
pub struct Engine {
    state: GameState,
    move_generator: MoveGenerator,
    searcher: Searcher,
    status: GameStatus,
}

impl Default for Engine {
    fn default() -> Self {
        let mut engine = Self::from_parts(GameState::default(), None);
        engine.refresh_status();
        engine
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `InvalidPosition` unless the starting position has exactly
    /// one king of each color.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config
            .starting_position
            .validate()
            .map_err(EngineError::InvalidPosition)?;

        let mut engine = Self::from_parts(GameState::new(config.starting_position), config.seed);
        engine.refresh_status();
        Ok(engine)
    }

    fn from_parts(state: GameState, seed: Option<u64>) -> Self {
        Self {
            state,
            move_generator: MoveGenerator::new(),
            searcher: Searcher::new(seed),
            status: GameStatus::Ongoing,
        }
    }

    /// Resets to the standard starting position and drops all history.
    pub fn new_game(&mut self) {
        self.state = GameState::default();
        self.refresh_status();
        info!("new game");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.board.get(square)
    }

    pub fn turn(&self) -> Color {
        self.state.board.turn()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history_len(&self) -> usize {
        self.state.history_len()
    }

    pub fn move_count(&self) -> u16 {
        self.state.board.move_count()
    }

    /// Pieces of `color` taken so far.
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        self.state.board.captured_pieces(color)
    }

    /// Legal moves of the piece on `square`; empty unless it belongs to the
    /// side to move.
    pub fn legal_moves(&mut self, square: Square) -> ChessMoveList {
        match self.state.board.get(square) {
            Some(piece) if piece.color == self.state.board.turn() => self
                .move_generator
                .legal_moves(&mut self.state.board, square),
            _ => ChessMoveList::new(),
        }
    }

    /// The first square, in row-major order, holding a piece of the side to
    /// move that can move.
    pub fn hint(&mut self) -> Option<Square> {
        let turn = self.state.board.turn();
        let origins: Vec<Square> = self
            .state
            .board
            .pieces(turn)
            .map(|(square, _)| square)
            .collect();
        origins
            .into_iter()
            .find(|&square| !self.legal_moves(square).is_empty())
    }

    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, EngineError> {
        let chess_move = self
            .legal_moves(from)
            .into_iter()
            .find(|chess_move| chess_move.to_square() == to)
            .ok_or(EngineError::IllegalMove { from, to })?;
        self.commit(chess_move)
    }

    /// Applies a fully specified move, such as one returned by
    /// `request_ai_move`. Rejected unless it is one of the current legal moves.
    pub fn apply_chess_move(&mut self, chess_move: &ChessMove) -> Result<MoveOutcome, EngineError> {
        let from = chess_move.from_square();
        let is_legal = self.legal_moves(from).iter().any(|m| m == chess_move);
        if !is_legal {
            return Err(EngineError::IllegalMove {
                from,
                to: chess_move.to_square(),
            });
        }
        self.commit(*chess_move)
    }

    fn commit(&mut self, chess_move: ChessMove) -> Result<MoveOutcome, EngineError> {
        let snapshot = self.state.board.clone();
        let captured = self
            .state
            .board
            .apply(&chess_move)
            .map_err(EngineError::InvalidPosition)?;
        self.state.history.push(snapshot);
        self.refresh_status();
        debug!("applied {}, status {:?}", chess_move, self.status);

        Ok(MoveOutcome {
            chess_move,
            captured,
            is_check: matches!(self.status, GameStatus::Check | GameStatus::Checkmate { .. }),
            is_checkmate: matches!(self.status, GameStatus::Checkmate { .. }),
            is_stalemate: self.status == GameStatus::Stalemate,
        })
    }

    /// Reverts the last move. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    pub fn try_undo(&mut self) -> Result<(), EngineError> {
        let previous = self.state.history.pop().ok_or(EngineError::EmptyHistory)?;
        self.state.board = previous;
        self.refresh_status();
        Ok(())
    }

    /// Chooses a move for `color` without applying it.
    pub fn request_ai_move(
        &mut self,
        color: Color,
        difficulty: Difficulty,
    ) -> Result<ChessMove, EngineError> {
        let before = self.state.board.clone();
        let result = self
            .searcher
            .search(&mut self.state.board, color, difficulty);

        if self.state.board != before {
            error!("search left speculative edits on the board; restoring it");
            debug_assert!(false, "search did not restore the board");
            self.state.board = before;
        }

        result.map_err(|err| match err {
            SearchError::NoAvailableMoves => EngineError::NoLegalMove { color },
            err => EngineError::Search(err),
        })
    }

    fn refresh_status(&mut self) {
        let turn = self.state.board.turn();
        let board = &mut self.state.board;
        self.status = match evaluate::game_ending(board, &self.move_generator, turn) {
            Some(GameEnding::Checkmate) => GameStatus::Checkmate {
                winner: turn.opposite(),
            },
            Some(GameEnding::Stalemate) => GameStatus::Stalemate,
            None if evaluate::current_player_is_in_check(board, &self.move_generator) => {
                GameStatus::Check
            }
            None => GameStatus::Ongoing,
        };
    }
}
