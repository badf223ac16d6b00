use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 6;
pub const NUM_SHIPS: usize = 7;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole fleet before the board is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 3000;

/// Number of cells on the board.
pub const GRID_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
