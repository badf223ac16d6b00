use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, FleetGenerator, Game, GameStatus, Side, UntriedStrategy};
use serde::Serialize;

#[derive(Serialize)]
struct SideReport {
    ships_left: usize,
    shots_taken: usize,
}

#[derive(Serialize)]
struct SimReport {
    status: GameStatus,
    winner: Option<Side>,
    moves: usize,
    user: SideReport,
    computer: SideReport,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // Fleets come from the first seed, shots from the second.
    let mut fleet_rng = SmallRng::seed_from_u64(seed1);
    let fleets = FleetGenerator::new();
    let user_board = fleets.random_board(&mut fleet_rng);
    let computer_board = fleets.random_board(&mut fleet_rng);

    let mut game = Game::with_boards(
        user_board,
        computer_board,
        Box::new(UntriedStrategy::new()),
        Box::new(UntriedStrategy::new()),
        SmallRng::seed_from_u64(seed2),
    );
    while game.play_move().is_some() {}

    let status = game.status();
    let winner = match status {
        GameStatus::UserWon => Some(Side::User),
        GameStatus::ComputerWon => Some(Side::Computer),
        _ => None,
    };
    let report_for = |side: Side| SideReport {
        ships_left: game.board(side).live_ships(),
        shots_taken: game.board(side.opponent()).attacked().count_ones(),
    };

    let report = SimReport {
        status,
        winner,
        moves: game.moves(),
        user: report_for(Side::User),
        computer: report_for(Side::Computer),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
