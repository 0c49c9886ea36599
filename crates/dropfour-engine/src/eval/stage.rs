//! Game stage derived from the number of pieces on the board.

/// Coarse phase of the game used to scale evaluator terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Opening,
    Midgame,
    Endgame,
}

impl Stage {
    /// Upper bound (inclusive) on piece count for the opening.
    pub const OPENING_MAX: usize = 10;
    /// Upper bound (inclusive) on piece count for the midgame.
    pub const MIDGAME_MAX: usize = 25;

    pub fn from_piece_count(pieces: usize) -> Stage {
        if pieces <= Self::OPENING_MAX {
            Stage::Opening
        } else if pieces <= Self::MIDGAME_MAX {
            Stage::Midgame
        } else {
            Stage::Endgame
        }
    }

    /// Index into per-stage tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Stage::from_piece_count(0), Stage::Opening);
        assert_eq!(Stage::from_piece_count(10), Stage::Opening);
        assert_eq!(Stage::from_piece_count(11), Stage::Midgame);
        assert_eq!(Stage::from_piece_count(25), Stage::Midgame);
        assert_eq!(Stage::from_piece_count(26), Stage::Endgame);
        assert_eq!(Stage::from_piece_count(42), Stage::Endgame);
    }

    #[test]
    fn indices_are_dense() {
        assert_eq!(Stage::Opening.index(), 0);
        assert_eq!(Stage::Midgame.index(), 1);
        assert_eq!(Stage::Endgame.index(), 2);
    }
}
