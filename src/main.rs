use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{init_logging, ui, Game, ManualStrategy, RandomStrategy};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer on a 6x6 grid.", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets and computer shots (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Exit right after the game instead of waiting for Enter")]
    no_pause: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut out = io::stdout();
    ui::greet(&mut out)?;

    let mut game = Game::new(
        Box::new(ManualStrategy::stdio()),
        Box::new(RandomStrategy::new()),
        rng,
    );
    game.run(&mut out)?;
    // Releases the stdin lock held by the manual strategy.
    drop(game);

    if !cli.no_pause {
        write!(out, "{}", ui::CLOSE_PROMPT)?;
        out.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}
