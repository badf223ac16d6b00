//! Ship definitions: a straight run of cells anchored at the bow.

use core::fmt;

use rand::Rng;

use crate::coord::Coord;

/// Axis a ship extends along from its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, column increasing.
    Horizontal,
    /// Extends down the column, row increasing.
    Vertical,
}

impl Orientation {
    /// Per-segment `(drow, dcol)` step.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Uniformly random orientation.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A class of ship in the fleet manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Display name, e.g. `"Cruiser"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of decks.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship anchored at its bow. Only `life` changes once the ship is built.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    bow: Coord,
    orientation: Orientation,
    life: usize,
}

impl Ship {
    /// Build a ship with full hit points. Bounds are checked when it is added to a
    /// board, not here.
    pub fn new(ship_type: ShipType, bow: Coord, orientation: Orientation) -> Self {
        Ship {
            ship_type,
            bow,
            orientation,
            life: ship_type.length(),
        }
    }

    /// The `length` cells the ship occupies, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.ship_type.length() as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn occupies(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Remove one hit point. Returns `true` if this hit sank the ship; a ship
    /// that is already sunk stays at zero.
    pub fn register_hit(&mut self) -> bool {
        if self.life == 0 {
            return false;
        }
        self.life -= 1;
        self.life == 0
    }

    /// Check if the ship is sunk (no hit points left).
    pub fn is_sunk(&self) -> bool {
        self.life == 0
    }

    /// Remaining hit points.
    pub fn life(&self) -> usize {
        self.life
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Anchor cell of the ship.
    pub fn bow(&self) -> Coord {
        self.bow
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", bow: ({}, {}), orientation: {:?}, life: {}/{} }}",
            self.ship_type.name(),
            self.bow.row,
            self.bow.col,
            self.orientation,
            self.life,
            self.ship_type.length(),
        )
    }
}
