use super::piece::{square_name, Type};
use smallvec::SmallVec;
use std::fmt;

/// Move list sized for the common case; spills to the heap past 64 moves.
pub type MoveList = SmallVec<[Move; 64]>;

/// A legal move as produced by the rules engine.
///
/// Besides the squares, a move carries the metadata the move orderer and the
/// capture-greedy policy need: the promotion piece and the kind of piece it
/// removes from the board (the pawn behind the target square for en passant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: u8,
    to: u8,
    promotion: Option<Type>,
    captured: Option<Type>,
}

impl Move {
    pub fn new(from: u8, to: u8, promotion: Option<Type>, captured: Option<Type>) -> Move {
        debug_assert!(from < 64 && to < 64, "square out of range");
        Self {
            from,
            to,
            promotion,
            captured,
        }
    }

    pub fn from(&self) -> u8 {
        self.from
    }

    pub fn to(&self) -> u8 {
        self.to
    }

    pub fn promotion(&self) -> Option<Type> {
        self.promotion
    }

    pub fn captured(&self) -> Option<Type> {
        self.captured
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

/// Long algebraic notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_flags() {
        let quiet = Move::new(12, 28, None, None);
        assert!(!quiet.is_capture());
        assert!(!quiet.is_promotion());

        let capture_promotion = Move::new(54, 63, Some(Type::Queen), Some(Type::Rook));
        assert!(capture_promotion.is_capture());
        assert!(capture_promotion.is_promotion());
        assert_eq!(capture_promotion.captured(), Some(Type::Rook));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(12, 28, None, None).to_string(), "e2e4");
        assert_eq!(Move::new(52, 60, Some(Type::Queen), None).to_string(), "e7e8q");
        assert_eq!(Move::new(48, 57, Some(Type::Knight), Some(Type::Knight)).to_string(), "a7b8n");
    }
}
