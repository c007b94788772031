//! Shared utilities for CLI commands.

use tiered_chess::board::color::Color;
use tiered_chess::board::Board;
use tiered_chess::game::{Engine, EngineConfig, GameStatus, MoveOutcome};

pub(crate) fn create_engine(seed: Option<u64>) -> Engine {
    let config = EngineConfig {
        starting_position: Board::starting_position(),
        seed,
    };
    // The standard starting position always validates.
    Engine::with_config(config).unwrap_or_default()
}

pub(crate) fn print_outcome(engine: &Engine, outcome: &MoveOutcome) {
    let mover = engine.turn().opposite();
    match outcome.captured {
        Some(piece) => println!(
            "{} plays {}, capturing {}",
            mover,
            outcome.chess_move,
            piece.to_fen()
        ),
        None => println!("{} plays {}", mover, outcome.chess_move),
    }
    println!("{}", engine.board());
}

/// Prints the result and returns true once the game is over.
pub(crate) fn report_status(engine: &Engine) -> bool {
    match engine.status() {
        GameStatus::Checkmate { winner } => {
            println!("checkmate, {} wins", winner);
            true
        }
        GameStatus::Stalemate => {
            println!("stalemate, the game is drawn");
            true
        }
        GameStatus::Check => {
            println!("{} is in check", engine.turn());
            false
        }
        GameStatus::Ongoing => false,
    }
}

pub(crate) fn print_hint(engine: &mut Engine) {
    match engine.hint() {
        Some(square) => println!("try moving the piece on {}", square),
        None => println!("no legal moves"),
    }
}

/// Takes back plies until `color` is to move again, or the history runs out.
/// Returns how many plies were undone.
pub(crate) fn undo_to_turn(engine: &mut Engine, color: Color) -> usize {
    let mut undone = 0;
    while engine.undo() {
        undone += 1;
        if engine.turn() == color {
            break;
        }
    }
    undone
}
