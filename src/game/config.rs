use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which cells a freshly placed food item may land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodPlacement {
    /// Every cell the snake can reach, `0..=grid_size` on both axes
    #[default]
    FullGrid,
    /// Half-open `0..grid_size`, never the last column or row
    Legacy,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the drawable surface in pixels
    pub canvas_width: u32,
    /// Height of the drawable surface in pixels
    pub canvas_height: u32,
    /// Edge length of one grid cell in pixels
    pub cell_size: u32,
    /// Delay before the second tick, in milliseconds
    pub initial_interval_ms: f64,
    /// Multiplier applied to the interval each time food is eaten
    pub speedup_factor: f64,
    /// Range used when placing food
    pub food_placement: FoodPlacement,
    /// Minimum |dx|+|dy| a drag must exceed to count as a swipe
    pub swipe_threshold: f64,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            cell_size: 20,
            initial_interval_ms: 100.0,
            speedup_factor: 0.9,
            food_placement: FoodPlacement::default(),
            swipe_threshold: 50.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom canvas size in pixels
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Default::default()
        }
    }

    /// Create a small canvas for testing (a 10x10 grid size, 11 cells per side)
    pub fn small() -> Self {
        Self::new(220, 220)
    }

    /// Load a configuration from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the board geometry cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.canvas_width >= 2 * self.cell_size && self.canvas_height >= 2 * self.cell_size,
            "canvas {}x{} must span at least two {}px cells on each axis",
            self.canvas_width,
            self.canvas_height,
            self.cell_size
        );
        ensure!(
            self.initial_interval_ms > 0.0,
            "initial interval must be positive, got {}",
            self.initial_interval_ms
        );
        ensure!(
            self.speedup_factor > 0.0 && self.speedup_factor <= 1.0,
            "speed-up factor must be in (0, 1], got {}",
            self.speedup_factor
        );
        ensure!(
            self.swipe_threshold >= 0.0,
            "swipe threshold must not be negative"
        );
        Ok(())
    }
}
