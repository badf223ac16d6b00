//! Random fleet generation.

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship, ShipType};

/// Places a fixed manifest of ships at random positions, retrying rejected
/// candidates until a shared attempt budget runs out.
#[derive(Debug, Clone, Copy)]
pub struct FleetGenerator<'a> {
    manifest: &'a [ShipType],
    budget: usize,
}

impl FleetGenerator<'static> {
    /// Generator for the standard fleet and attempt budget.
    pub fn new() -> Self {
        Self::with_manifest(&FLEET, MAX_PLACEMENT_ATTEMPTS)
    }
}

impl Default for FleetGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FleetGenerator<'a> {
    pub fn with_manifest(manifest: &'a [ShipType], budget: usize) -> Self {
        Self { manifest, budget }
    }

    pub fn manifest(&self) -> &'a [ShipType] {
        self.manifest
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// One attempt at a full board. The budget is shared by every ship in the
    /// manifest; `None` means it ran out before the last ship was placed.
    pub fn form_board<R: Rng>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new();
        let mut attempts = 0;

        for &ship_type in self.manifest {
            loop {
                attempts += 1;
                if attempts > self.budget {
                    warn!(
                        "fleet placement gave up after {} attempts ({} of {} ships placed)",
                        self.budget,
                        board.ships().len(),
                        self.manifest.len()
                    );
                    return None;
                }
                let candidate = random_ship(rng, ship_type);
                match board.add_ship(candidate) {
                    Ok(()) => break,
                    Err(e) => debug!("rejected {:?}: {}", candidate, e),
                }
            }
        }
        debug!("fleet placed in {} attempts", attempts);
        Some(board)
    }

    /// Retry [`FleetGenerator::form_board`] until it succeeds.
    pub fn random_board<R: Rng>(&self, rng: &mut R) -> Board {
        loop {
            if let Some(board) = self.form_board(rng) {
                return board;
            }
        }
    }
}

/// Candidate ship with a uniformly random bow and orientation.
fn random_ship<R: Rng>(rng: &mut R, ship_type: ShipType) -> Ship {
    let n = BOARD_SIZE as i32;
    let bow = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
    Ship::new(ship_type, bow, Orientation::random(rng))
}

/// Standard board from the standard fleet.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    FleetGenerator::new().random_board(rng)
}
