#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use solo_battleship::{
    init_logging, run_interactive, simulate, Difficulty, Game, GameConfig, GameMode, Session,
    DEFAULT_THINK_DELAY,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_THINK_DELAY.as_millis() as u64, help = "Pause before the enemy fires, in milliseconds")]
        think_ms: u64,
        #[arg(long, help = "Skip placement: deal both fleets randomly")]
        quick: bool,
    },
    /// Measure how many shots the AI needs to sink a random fleet.
    Sim {
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            think_ms,
            quick,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = GameConfig {
                difficulty,
                seed,
                think_delay: Duration::from_millis(think_ms),
                mode: if quick { GameMode::Quick } else { GameMode::Classic },
            };
            let game = Game::new(config).map_err(|e| anyhow::anyhow!(e))?;
            run_interactive(Session::new(game)).await?;
        }
        Commands::Sim {
            difficulty,
            games,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let levels = match difficulty {
                Some(d) => vec![d],
                None => Difficulty::ALL.to_vec(),
            };
            let mut results = Vec::new();
            for level in levels {
                results.push(simulate(level, games, &mut rng).map_err(|e| anyhow::anyhow!(e))?);
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }
    Ok(())
}
