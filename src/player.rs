use rand::rngs::SmallRng;

use crate::{board::BB, common::ShotError, coord::Coord};

/// Interface implemented by the different ways of choosing a target.
pub trait TargetingStrategy {
    /// Propose the next cell to fire at. `history` holds the opponent cells already
    /// attacked; a strategy may still propose one of them and will be asked again.
    /// `None` means the strategy has nothing left to offer (e.g. its input closed).
    fn next_target(&mut self, rng: &mut SmallRng, history: &BB) -> Option<Coord>;

    /// Inform the strategy that its last proposal was rejected by the board.
    fn report_rejection(&mut self, _target: Coord, _error: ShotError) {}

    /// Whether `report_rejection` already shows the rejection to the player, so the
    /// game loop must not print it again.
    fn shows_rejections(&self) -> bool {
        false
    }
}
