use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::BB,
    common::ShotError,
    config::BOARD_SIZE,
    coord::Coord,
    player::TargetingStrategy,
};

/// Computer opponent: any cell of the grid with equal probability, ignoring what
/// has already been attacked.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingStrategy for RandomStrategy {
    fn next_target(&mut self, rng: &mut SmallRng, _history: &BB) -> Option<Coord> {
        let n = BOARD_SIZE as i32;
        Some(Coord::new(rng.random_range(0..n), rng.random_range(0..n)))
    }

    fn report_rejection(&mut self, target: Coord, error: ShotError) {
        debug!("random target {} rejected: {:?}", target, error);
    }
}

/// Uniform choice among cells not yet attacked. Never produces a rejected shot,
/// so a game between two of these always finishes.
#[derive(Debug, Default, Clone, Copy)]
pub struct UntriedStrategy;

impl UntriedStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingStrategy for UntriedStrategy {
    fn next_target(&mut self, rng: &mut SmallRng, history: &BB) -> Option<Coord> {
        let open = !*history;
        let remaining = open.count_ones();
        if remaining == 0 {
            return None;
        }
        open.iter_set_bits().nth(rng.random_range(0..remaining))
    }
}
