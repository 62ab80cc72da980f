//! Isle3D Terminal - interactive island stage dial
//!
//! Controls:
//!   - Left/Right arrows: spin the island
//!   - Mouse drag: spin by horizontal drag distance
//!   - Scroll wheel: nudge the spin
//!   - Q/ESC: Quit

use anyhow::Context;
use clap::Parser;
use isle3d_terminal::{AppConfig, TerminalApp};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "isle3d-terminal", version, about = "Spin the island and watch its stage")]
struct Cli {
    /// TOML file with [motion] and [terminal] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second, overrides terminal.fps
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs here, filtered by RUST_LOG (default info). The TUI owns
    /// stderr, so without this flag logging stays off even if RUST_LOG is set
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(fps) = cli.fps {
        anyhow::ensure!(fps > 0, "--fps must be positive");
        config.terminal.fps = fps;
    }
    log::info!("starting with {:?}", config);

    let mut app = TerminalApp::new(config)?;
    app.run().context("terminal session failed")?;

    println!("Thank you for visiting the island!");
    Ok(())
}
