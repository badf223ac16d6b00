//! Common types for the game: shot outcomes and placement/shot errors.

use core::fmt;

/// Result of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship that still has segments left.
    Hit,
    /// Shot removed the last segment of a ship.
    Sunk,
    /// Shot struck open water.
    Miss,
}

impl ShotOutcome {
    /// `Hit` and `Sunk` let the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Reasons a shot is rejected without changing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already attacked.
    AlreadyAttacked,
}

/// Reasons a ship cannot be added to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some segment lies outside the grid.
    OutOfBounds,
    /// Some segment lies on, or touches, a ship already placed.
    Overlap,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "You are trying to shoot outside the board."),
            ShotError::AlreadyAttacked => write!(f, "You already shot at that cell."),
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Ship placement overlaps or touches another ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
