use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use tile_snake::game::GameConfig;
use tile_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tile-snake")]
#[command(version, about = "Snake with one tile per body segment")]
struct Cli {
    /// Side length of one grid cell in pixels
    #[arg(long, default_value = "50")]
    cell_size: i32,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Snake length at the start of every round
    #[arg(long, default_value = "6")]
    length: usize,

    /// Write logs to this file (the terminal is taken over by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before the terminal goes into raw mode
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), file)
            .context("Failed to initialize logger")?;
        info!("starting tile-snake");
    }

    let config = GameConfig {
        cell_size: cli.cell_size,
        initial_snake_length: cli.length,
        tick_ms: cli.tick_ms,
        ..GameConfig::default()
    };

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
