use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use heuristic_connect_four::config::AppConfig;
use heuristic_connect_four::game::Player;
use heuristic_connect_four::logging;
use heuristic_connect_four::ui::{App, TextGame};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against the heuristic AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a heuristic AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the AI's search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Let the AI make the first move
    #[arg(long)]
    ai_first: bool,

    /// Line-based play on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Directory for log files in full-screen mode
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The full-screen UI owns the terminal, so its logs go to files.
    let _logger = if cli.plain {
        logging::init_stderr("warn")
    } else {
        logging::init_file("info", &cli.log_dir)
    }
    .context("starting logger")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.ai_first {
        config.game.ai_first = true;
    }
    config.validate().context("invalid settings")?;

    if cli.plain {
        run_plain(&config)
    } else {
        run_tui(&config).context("terminal UI failed")
    }
}

fn run_plain(config: &AppConfig) -> Result<()> {
    let first = if config.game.ai_first {
        Player::AI
    } else {
        Player::HUMAN
    };
    let mut game = TextGame::new(io::stdin().lock(), io::stdout(), config.search.depth, first);
    game.run()?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config.search.depth, config.game.ai_first);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
