use super::color::Color;
use super::Board;
use common::Square;
use std::fmt;

impl Board {
    /// Renders the board with black's back rank at the top, matching row 0 of
    /// the internal coordinates.
    pub fn to_ascii(&self) -> String {
        let mut buffer = String::new();
        for row in 0..8u8 {
            buffer.push_str(&format!("{} ", 8 - row));
            for col in 0..8u8 {
                let c = match self.get(Square::new(row, col)) {
                    Some(piece) => piece.to_fen(),
                    None => '.',
                };
                buffer.push(c);
            }
            buffer.push('\n');
        }
        buffer.push_str("  abcdefgh\n");
        buffer
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let turn = match self.turn() {
            Color::White => "white",
            Color::Black => "black",
        };
        write!(f, "{}{} to move", self.to_ascii(), turn)
    }
}

/// Builds a board from a diagram. The first character is row 0 (a8) and the
/// last is row 7 col 7 (h1). The resulting board has white to move and no
/// castling rights.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(
            pieces.len(),
            64,
            "Invalid number of squares. Expected 64, got {}",
            pieces.len()
        );
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let piece = $crate::board::piece::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                board.put($crate::Square::from_index(i), piece).unwrap();
            }
        }
        board
    }};
}
