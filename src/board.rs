//! Game board: ship placement with a no-touching buffer, and shot resolution.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use log::trace;

use crate::bitboard::BitBoard;
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::coord::Coord;
use crate::ship::Ship;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Set of board cells, one bit per cell.
pub type BB = BitBoard<u64, GRID_SIZE>;

/// What a single grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
        }
    }
}

/// One side's board: ships, what has been shot, and which cells are off limits for
/// further placements.
#[derive(Clone)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    ships: Vec<Ship>,
    hidden: bool,
    live_ships: usize,
    blocked: BB,
    attacked: BB,
}

impl Board {
    /// Create an empty, visible board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            ships: Vec::with_capacity(NUM_SHIPS),
            hidden: false,
            live_ships: 0,
            blocked: BB::new(),
            attacked: BB::new(),
        }
    }

    /// Whether `coord` lies outside the grid.
    pub fn is_out_of_bounds(coord: Coord) -> bool {
        coord.is_out_of_bounds()
    }

    /// Hide ship bodies when rendering.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Ships in placement order, sunk ones included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of placed ships that still have hit points.
    pub fn live_ships(&self) -> usize {
        self.live_ships
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.live_ships == 0
    }

    /// Ship cells plus their buffers.
    pub fn blocked(&self) -> BB {
        self.blocked
    }

    /// Cells that have already been shot at.
    pub fn attacked(&self) -> BB {
        self.attacked
    }

    /// The raw cell at `coord`, ignoring the hidden flag.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if coord.is_out_of_bounds() {
            None
        } else {
            Some(self.cells[coord.row as usize][coord.col as usize])
        }
    }

    /// Place `ship`. Nothing changes unless every cell is on the board and clear of
    /// other ships and their buffers.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let mask = BB::from_coords(ship.cells()).map_err(|_| PlacementError::OutOfBounds)?;
        if !(self.blocked & mask).is_empty() {
            return Err(PlacementError::Overlap);
        }

        for c in ship.cells() {
            self.cells[c.row as usize][c.col as usize] = Cell::Ship;
        }
        self.blocked |= mask;
        self.blocked |= contour(&ship);
        if !ship.is_sunk() {
            self.live_ships += 1;
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `target`. Bounds are checked before repeats.
    pub fn shoot(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        if Self::is_out_of_bounds(target) {
            return Err(ShotError::OutOfBounds);
        }
        // in bounds, so insert only reports whether the cell is new
        if !self.attacked.insert(target).unwrap_or(false) {
            return Err(ShotError::AlreadyAttacked);
        }

        let (r, c) = (target.row as usize, target.col as usize);
        let outcome = match self.ships.iter_mut().find(|s| s.occupies(target)) {
            Some(ship) => {
                self.cells[r][c] = Cell::Hit;
                if ship.register_hit() {
                    self.live_ships -= 1;
                    self.blocked |= contour(ship);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            None => {
                self.cells[r][c] = Cell::Miss;
                ShotOutcome::Miss
            }
        };
        trace!("shot at {} -> {:?}, {} ships left", target, outcome, self.live_ships);
        Ok(outcome)
    }

    /// Text snapshot of the board, honouring the hidden flag.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Ship cells together with every in-bounds cell touching them.
fn contour(ship: &Ship) -> BB {
    let mut ring = BB::new();
    for cell in ship.cells() {
        for n in cell.neighbors().chain(core::iter::once(cell)) {
            let _ = ring.insert(n);
        }
    }
    ring
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " |")?;
        for c in 1..=GRID_SIZE {
            write!(f, "{}|", c)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{}|", r + 1)?;
            for &cell in row {
                let shown = if self.hidden && cell == Cell::Ship {
                    Cell::Empty
                } else {
                    cell
                };
                write!(f, "{}|", shown.glyph())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  live_ships: {},\n  hidden: {},\n  ships: {:?},\n  attacked: {:?}\n}}",
            self.live_ships, self.hidden, self.ships, self.attacked
        )
    }
}
