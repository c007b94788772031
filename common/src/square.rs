use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

/// A square on the 8x8 board, addressed by `(row, col)`. Row 0 is black's back
/// rank (rank 8), row 7 is white's back rank (rank 1). Column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if either coordinate is off the board.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates must be in 0..8");
        Self { row, col }
    }

    /// Returns `None` if either coordinate is outside the board.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Index in row-major order, 0 (a8) to 63 (h1).
    pub fn index(&self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::new((index / 8) as u8, (index % 8) as u8)
    }

    /// The square at `(row + d_row, col + d_col)`, if it is on the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    pub fn from_algebraic(algebraic_coord: &str) -> Option<Self> {
        let caps = ALGEBRAIC_RE.captures(algebraic_coord.trim())?;
        let file = caps[1].chars().next()?.to_ascii_lowercase();
        let rank = caps[2].chars().next()?.to_digit(10)? as u8;
        let col = file as u8 - b'a';
        Some(Self::new(8 - rank, col))
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

pub const A8: Square = Square::new(0, 0);
pub const B8: Square = Square::new(0, 1);
pub const C8: Square = Square::new(0, 2);
pub const D8: Square = Square::new(0, 3);
pub const E8: Square = Square::new(0, 4);
pub const F8: Square = Square::new(0, 5);
pub const G8: Square = Square::new(0, 6);
pub const H8: Square = Square::new(0, 7);
pub const A7: Square = Square::new(1, 0);
pub const B7: Square = Square::new(1, 1);
pub const C7: Square = Square::new(1, 2);
pub const D7: Square = Square::new(1, 3);
pub const E7: Square = Square::new(1, 4);
pub const F7: Square = Square::new(1, 5);
pub const G7: Square = Square::new(1, 6);
pub const H7: Square = Square::new(1, 7);
pub const A6: Square = Square::new(2, 0);
pub const B6: Square = Square::new(2, 1);
pub const C6: Square = Square::new(2, 2);
pub const D6: Square = Square::new(2, 3);
pub const E6: Square = Square::new(2, 4);
pub const F6: Square = Square::new(2, 5);
pub const G6: Square = Square::new(2, 6);
pub const H6: Square = Square::new(2, 7);
pub const A5: Square = Square::new(3, 0);
pub const B5: Square = Square::new(3, 1);
pub const C5: Square = Square::new(3, 2);
pub const D5: Square = Square::new(3, 3);
pub const E5: Square = Square::new(3, 4);
pub const F5: Square = Square::new(3, 5);
pub const G5: Square = Square::new(3, 6);
pub const H5: Square = Square::new(3, 7);
pub const A4: Square = Square::new(4, 0);
pub const B4: Square = Square::new(4, 1);
pub const C4: Square = Square::new(4, 2);
pub const D4: Square = Square::new(4, 3);
pub const E4: Square = Square::new(4, 4);
pub const F4: Square = Square::new(4, 5);
pub const G4: Square = Square::new(4, 6);
pub const H4: Square = Square::new(4, 7);
pub const A3: Square = Square::new(5, 0);
pub const B3: Square = Square::new(5, 1);
pub const C3: Square = Square::new(5, 2);
pub const D3: Square = Square::new(5, 3);
pub const E3: Square = Square::new(5, 4);
pub const F3: Square = Square::new(5, 5);
pub const G3: Square = Square::new(5, 6);
pub const H3: Square = Square::new(5, 7);
pub const A2: Square = Square::new(6, 0);
pub const B2: Square = Square::new(6, 1);
pub const C2: Square = Square::new(6, 2);
pub const D2: Square = Square::new(6, 3);
pub const E2: Square = Square::new(6, 4);
pub const F2: Square = Square::new(6, 5);
pub const G2: Square = Square::new(6, 6);
pub const H2: Square = Square::new(6, 7);
pub const A1: Square = Square::new(7, 0);
pub const B1: Square = Square::new(7, 1);
pub const C1: Square = Square::new(7, 2);
pub const D1: Square = Square::new(7, 3);
pub const E1: Square = Square::new(7, 4);
pub const F1: Square = Square::new(7, 5);
pub const G1: Square = Square::new(7, 6);
pub const H1: Square = Square::new(7, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_zero_is_black_back_rank() {
        assert_eq!(A8, Square::new(0, 0));
        assert_eq!(H1, Square::new(7, 7));
        assert_eq!(E2, Square::new(6, 4));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Some(A1), Square::from_algebraic("a1"));
        assert_eq!(Some(A1), Square::from_algebraic("A1"));
        assert_eq!(Some(E5), Square::from_algebraic("e5"));
        assert_eq!(None, Square::from_algebraic("i9"));
        assert_eq!(None, Square::from_algebraic("e"));
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("a8", A8.to_algebraic());
        assert_eq!("h8", H8.to_algebraic());
        assert_eq!("d4", D4.to_algebraic());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Some(B3), A2.offset(-1, 1));
        assert_eq!(None, A2.offset(0, -1));
        assert_eq!(None, H8.offset(-1, 0));
    }

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, square) in Square::all().enumerate() {
            assert_eq!(i, square.index());
        }
    }
}
