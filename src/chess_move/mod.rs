pub mod castle;
pub mod chess_move;

pub use castle::CastleSide;
pub use chess_move::{ChessMove, MoveFlags};
