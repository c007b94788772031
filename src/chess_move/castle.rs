use std::fmt;

/// Which rook the king castles towards. Column geometry is shared by both
/// colors; only the row differs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// The king always ends two columns towards the rook.
    pub fn king_to_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    pub fn rook_from_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// The square adjacent to the king's destination, on the king's original side.
    pub fn rook_to_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Columns strictly between the king and the rook, all of which must be empty.
    pub fn between_cols(&self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    /// Columns the king passes through, destination included.
    pub fn king_path_cols(&self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[3, 2],
        }
    }

    /// Castle side whose rook starts on `col`, if `col` is a rook corner.
    pub fn from_rook_col(col: u8) -> Option<Self> {
        match col {
            7 => Some(CastleSide::Kingside),
            0 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside"),
            CastleSide::Queenside => write!(f, "queenside"),
        }
    }
}
