//! Why a tile could not be placed.

use thiserror::Error;

use crate::cards::Direction;

/// A refused placement. Expected and non-fatal: the board keeps its
/// previous contents (apart from any edge growth, see `Board::place_card`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementRejection {
    #[error("Position already occupied.")]
    Occupied,

    #[error("Card must connect to at least one adjacent card.")]
    NoAdjacentTile,

    #[error("Connection mismatch with {0} card.")]
    ConnectionMismatch(Direction),

    #[error("Position ({row}, {column}) is more than one step outside the board.")]
    OutOfBounds { row: i64, column: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(PlacementRejection::Occupied.to_string(), "Position already occupied.");
        assert_eq!(
            PlacementRejection::ConnectionMismatch(Direction::Up).to_string(),
            "Connection mismatch with UP card."
        );
        assert_eq!(
            PlacementRejection::NoAdjacentTile.to_string(),
            "Card must connect to at least one adjacent card."
        );
    }
}
