use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::GameState;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Config loading runs before the configured subscriber exists
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .finish();
    let mut app_config =
        tracing::subscriber::with_default(bootstrap, || AppConfig::load_or_default(&cli.config))
            .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        app_config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        app_config.board.cols = cols;
    }
    app_config.validate().context("invalid configuration")?;

    init_logging(&app_config.logging.level);

    let board = app_config.build_board()?;
    tracing::info!(rows = board.rows(), cols = board.cols(), "starting game");

    let stdin = io::stdin();
    let mut app = App::new(GameState::with_board(board), stdin.lock(), io::stdout());
    app.run().context("game session failed")?;

    Ok(())
}

/// Logs go to stderr so the game dialogue on stdout stays clean. `RUST_LOG`
/// wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
