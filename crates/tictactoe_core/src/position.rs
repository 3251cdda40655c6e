//! Board positions and their coordinate conventions.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions map to board indices 0-8 in row-major order. For display, a
/// position is described by its 1-based move location (`index + 1`) and
/// its 1-based `(col, row)` coordinates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Iterates all 9 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().nth(index)
    }

    /// Returns the 1-based move location recorded in history (1-9).
    pub fn move_location(self) -> usize {
        self.to_index() + 1
    }

    /// Creates position from a 1-based move location (1-9).
    #[instrument]
    pub fn from_move_location(location: usize) -> Option<Self> {
        location.checked_sub(1).and_then(Self::from_index)
    }

    /// Returns the 1-based `(col, row)` coordinates of this position.
    pub fn coordinates(self) -> (usize, usize) {
        let index = self.to_index();
        (index % 3 + 1, index / 3 + 1)
    }

    /// Creates position from 1-based `(col, row)` coordinates.
    pub fn from_coordinates(col: usize, row: usize) -> Option<Self> {
        if !(1..=3).contains(&col) || !(1..=3).contains(&row) {
            return None;
        }
        Self::from_index((row - 1) * 3 + (col - 1))
    }

    /// Returns the coordinates formatted for the move list.
    pub fn coordinate_text(self) -> &'static str {
        match self {
            Position::TopLeft => "(1, 1)",
            Position::TopCenter => "(2, 1)",
            Position::TopRight => "(3, 1)",
            Position::MiddleLeft => "(1, 2)",
            Position::Center => "(2, 2)",
            Position::MiddleRight => "(3, 2)",
            Position::BottomLeft => "(1, 3)",
            Position::BottomCenter => "(2, 3)",
            Position::BottomRight => "(3, 3)",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        let indices: Vec<usize> = Position::all().map(Position::to_index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coordinate_text_agrees_with_coordinates() {
        for pos in Position::all() {
            let (col, row) = pos.coordinates();
            assert_eq!(pos.coordinate_text(), format!("({col}, {row})"));
        }
    }

    #[test]
    fn test_from_coordinates_inverts_coordinates() {
        for pos in Position::all() {
            let (col, row) = pos.coordinates();
            assert_eq!(Position::from_coordinates(col, row), Some(pos));
        }
        assert_eq!(Position::from_coordinates(0, 1), None);
        assert_eq!(Position::from_coordinates(1, 4), None);
    }

    #[test]
    fn test_move_location_is_one_based() {
        assert_eq!(Position::TopLeft.move_location(), 1);
        assert_eq!(Position::BottomRight.move_location(), 9);
        assert_eq!(Position::from_move_location(5), Some(Position::Center));
        assert_eq!(Position::from_move_location(0), None);
        assert_eq!(Position::from_move_location(10), None);
    }
}
