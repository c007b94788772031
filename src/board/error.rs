use common::Square;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("cannot put a piece on {square}, the square is already occupied")]
    SquareOccupied { square: Square },
    #[error("cannot apply chess move, the `from` square {square} is empty")]
    EmptySquare { square: Square },
    #[error("cannot apply chess move, the piece on {square} does not match the move")]
    PieceMismatch { square: Square },
    #[error("board invariant violated: {msg}")]
    InvariantViolation { msg: String },
}
