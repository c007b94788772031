/// The castling rights still held by one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl CastleRights {
    pub const fn all() -> Self {
        Self {
            kingside: true,
            queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            kingside: false,
            queenside: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.kingside && !self.queenside
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}
