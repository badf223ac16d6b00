#![cfg(feature = "std")]
//! Turn controller and game loop.

use std::io::Write;

use log::info;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{
    board::Board,
    common::{ShotError, ShotOutcome},
    coord::Coord,
    fleet::FleetGenerator,
    player::TargetingStrategy,
    ui,
};

/// The two sides of a game. The user moves on even turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    User,
    Computer,
}

impl Side {
    /// Side that moves on turn index `turn`.
    pub fn from_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            Side::User
        } else {
            Side::Computer
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::Computer => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    UserWon,
    ComputerWon,
    /// A strategy stopped producing targets (end of input) before anyone won.
    Abandoned,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A shot that landed, plus the proposals the board rejected first, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub target: Coord,
    pub outcome: ShotOutcome,
    pub rejections: Vec<(Coord, ShotError)>,
}

impl MoveOutcome {
    /// Whether the mover keeps the turn.
    pub fn extra_turn(&self) -> bool {
        self.outcome.grants_extra_turn()
    }
}

/// A side together with the strategy that picks its targets.
pub struct Player {
    side: Side,
    strategy: Box<dyn TargetingStrategy>,
}

impl Player {
    pub fn new(side: Side, strategy: Box<dyn TargetingStrategy>) -> Self {
        Self { side, strategy }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Whether the strategy shows its own rejections to the player.
    pub fn shows_rejections(&self) -> bool {
        self.strategy.shows_rejections()
    }

    /// Ask for targets until `enemy` accepts one. Rejected targets are reported
    /// back to the strategy. `None` if the strategy gives up first.
    pub fn take_turn(&mut self, rng: &mut SmallRng, enemy: &mut Board) -> Option<MoveOutcome> {
        let mut rejections = Vec::new();
        loop {
            let target = self.strategy.next_target(rng, &enemy.attacked())?;
            match enemy.shoot(target) {
                Ok(outcome) => {
                    return Some(MoveOutcome {
                        target,
                        outcome,
                        rejections,
                    })
                }
                Err(e) => {
                    rejections.push((target, e));
                    self.strategy.report_rejection(target, e);
                }
            }
        }
    }
}

/// Owns both boards and both players and drives the turn order.
pub struct Game {
    boards: [Board; 2],
    players: [Player; 2],
    turn: usize,
    moves: usize,
    status: GameStatus,
    rng: SmallRng,
}

impl Game {
    /// New game on freshly generated fleets. The computer's board is hidden.
    pub fn new(
        user: Box<dyn TargetingStrategy>,
        computer: Box<dyn TargetingStrategy>,
        mut rng: SmallRng,
    ) -> Self {
        let fleets = FleetGenerator::new();
        let user_board = fleets.random_board(&mut rng);
        let computer_board = fleets.random_board(&mut rng);
        Self::with_boards(user_board, computer_board, user, computer, rng)
    }

    /// New game on the given boards.
    pub fn with_boards(
        mut user_board: Board,
        mut computer_board: Board,
        user: Box<dyn TargetingStrategy>,
        computer: Box<dyn TargetingStrategy>,
        rng: SmallRng,
    ) -> Self {
        user_board.set_hidden(false);
        computer_board.set_hidden(true);
        Self {
            boards: [user_board, computer_board],
            players: [Player::new(Side::User, user), Player::new(Side::Computer, computer)],
            turn: 0,
            moves: 0,
            status: GameStatus::InProgress,
            rng,
        }
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Number of shots that landed so far, both sides together.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side whose move is next.
    pub fn active_side(&self) -> Side {
        Side::from_turn(self.turn)
    }

    /// Resolve one move for the active side. Returns `None` once the game is
    /// over, including when this call ends it by abandonment.
    pub fn play_move(&mut self) -> Option<(Side, MoveOutcome)> {
        if self.status.is_over() {
            return None;
        }
        let side = self.active_side();
        let player = &mut self.players[side.index()];
        let enemy = &mut self.boards[side.opponent().index()];

        let mv = match player.take_turn(&mut self.rng, enemy) {
            Some(mv) => mv,
            None => {
                info!("{:?} stopped providing targets, game abandoned", side);
                self.status = GameStatus::Abandoned;
                return None;
            }
        };

        self.moves += 1;
        if !mv.extra_turn() {
            self.turn += 1;
        }
        self.status = self.evaluate();
        Some((side, mv))
    }

    /// Winner check, computer's fleet first.
    fn evaluate(&self) -> GameStatus {
        if self.board(Side::Computer).all_sunk() {
            GameStatus::UserWon
        } else if self.board(Side::User).all_sunk() {
            GameStatus::ComputerWon
        } else {
            GameStatus::InProgress
        }
    }

    /// Play to the end, rendering both boards before every move. Rejected shots are
    /// printed unless the mover's strategy already showed them.
    pub fn run<W: Write>(&mut self, out: &mut W) -> anyhow::Result<GameStatus> {
        info!("game started");
        while !self.status.is_over() {
            ui::print_boards(out, self.board(Side::User), self.board(Side::Computer))?;
            ui::announce_turn(out, self.active_side())?;
            out.flush()?;
            let (side, mv) = match self.play_move() {
                Some(played) => played,
                None => break,
            };
            if !self.players[side.index()].shows_rejections() {
                for &(target, error) in &mv.rejections {
                    ui::announce_rejection(out, side, target, error)?;
                }
            }
            ui::announce_shot(out, side, &mv)?;
        }
        ui::print_boards(out, self.board(Side::User), self.board(Side::Computer))?;
        ui::announce_result(out, self.status)?;
        out.flush()?;
        info!("game finished after {} moves: {:?}", self.moves, self.status);
        Ok(self.status)
    }
}
