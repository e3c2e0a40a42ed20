use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use heuristic_connect_four::ai::{HeuristicAgent, RandomAgent};
use heuristic_connect_four::arena::Arena;
use heuristic_connect_four::config::AppConfig;
use heuristic_connect_four::logging;

/// Pit the heuristic AI against a random player.
#[derive(Parser)]
#[command(name = "arena", about = "Play the heuristic AI against a random agent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the AI's search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the random agent's seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init_stderr("info").context("starting logger")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.arena.seed = seed;
    }
    config.validate().context("invalid settings")?;

    let mut agent = HeuristicAgent::new(config.search.depth);
    let mut random = RandomAgent::with_seed(config.arena.seed);
    let stats = Arena::new(config.arena.clone()).run(&mut agent, &mut random);

    println!("-------------------------------------------");
    println!(
        "Heuristic (depth {}) vs Random over {} games",
        config.search.depth,
        stats.games()
    );
    println!(
        "  wins: {}  losses: {}  draws: {}",
        stats.wins, stats.losses, stats.draws
    );
    println!(
        "  win rate: {:.1}%  average length: {:.1}",
        stats.win_rate() * 100.0,
        stats.average_game_length()
    );
    Ok(())
}
