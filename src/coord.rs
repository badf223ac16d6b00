//! Board coordinates.

use core::fmt;

use crate::config::BOARD_SIZE;

const GRID: i32 = BOARD_SIZE as i32;

/// Offsets of the eight cells surrounding a coordinate.
const AROUND: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-based (row, column) pair. Values outside the board are representable so
/// that an out-of-range shot can be reported instead of rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns `true` when the coordinate lies outside the `BOARD_SIZE`×`BOARD_SIZE` grid.
    pub fn is_out_of_bounds(&self) -> bool {
        !(0..GRID).contains(&self.row) || !(0..GRID).contains(&self.col)
    }

    /// Coordinate shifted by `drow` rows and `dcol` columns.
    pub fn offset(&self, drow: i32, dcol: i32) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// In-bounds cells among the eight surrounding this one.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        AROUND
            .iter()
            .map(move |&(dr, dc)| self.offset(dr, dc))
            .filter(|c| !c.is_out_of_bounds())
    }
}

impl fmt::Display for Coord {
    /// One-based `row:col`, matching what a player types.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.col + 1)
    }
}
