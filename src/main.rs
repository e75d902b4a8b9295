use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodPlacement, GameConfig};
use grid_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a wrap-around grid, in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Cell edge length in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Initial delay between ticks in milliseconds
    #[arg(long)]
    interval: Option<f64>,

    /// Cells food may be placed on
    #[arg(long, value_enum)]
    food_placement: Option<PlacementArg>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    /// Any cell the snake can reach
    FullGrid,
    /// Never the last row or column
    Legacy,
}

impl From<PlacementArg> for FoodPlacement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::FullGrid => FoodPlacement::FullGrid,
            PlacementArg::Legacy => FoodPlacement::Legacy,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.canvas_width = width;
        }
        if let Some(height) = self.height {
            config.canvas_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(interval) = self.interval {
            config.initial_interval_ms = interval;
        }
        if let Some(placement) = self.food_placement {
            config.food_placement = placement.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

/// The terminal belongs to the UI, so logs only go to a file when one is requested
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {:?}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::debug!(?config, "configuration loaded");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
