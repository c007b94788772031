pub mod difficulty;
pub mod engine;
pub mod position_counter;

pub use difficulty::Difficulty;
pub use engine::{Engine, EngineConfig, EngineError, GameState, GameStatus, MoveOutcome};
