use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::geometry::{Cell, Grid};

pub const DEFAULT_CONFIG_PATH: &str = "snake_config.json";

/// Tunables for a game session. Missing fields in a config file take the
/// default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playfield in cells
    pub grid_width: i32,
    /// Height of the playfield in cells
    pub grid_height: i32,
    /// Side of one cell in pixels
    pub cell_size: f32,
    /// Where the single-segment snake starts
    pub start: Cell,

    /// Seconds between ticks at session start
    pub initial_tick_interval: f64,
    /// Multiplier applied to the tick interval on every food eaten
    pub speed_ramp_factor: f64,
    /// Floor for the tick interval
    pub min_tick_interval: f64,

    // Food pulse, in pixels
    pub food_min_size: f32,
    pub food_max_size: f32,
    pub food_pulse_step: f32,

    /// JSON file holding the best score
    pub save_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 40,
            cell_size: 10.0,
            start: Cell::new(10, 10),
            initial_tick_interval: 0.1,
            speed_ramp_factor: 0.95,
            min_tick_interval: 0.03,
            food_min_size: 10.0,
            food_max_size: 15.0,
            food_pulse_step: 0.4,
            save_path: "snake_save.json".to_string(),
        }
    }
}

impl GameConfig {
    /// Default config on a custom grid
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid().contains(self.start),
            "start cell ({}, {}) lies outside the grid",
            self.start.x,
            self.start.y
        );
        ensure!(self.cell_size > 0.0, "cell size must be positive");
        ensure!(
            self.initial_tick_interval > 0.0 && self.min_tick_interval > 0.0,
            "tick intervals must be positive"
        );
        ensure!(
            self.speed_ramp_factor > 0.0 && self.speed_ramp_factor < 1.0,
            "speed ramp factor must lie in (0, 1), got {}",
            self.speed_ramp_factor
        );
        ensure!(
            self.food_min_size > 0.0 && self.food_min_size <= self.food_max_size,
            "food size range {}..{} is invalid",
            self.food_min_size,
            self.food_max_size
        );
        ensure!(self.food_pulse_step >= 0.0, "food pulse step cannot be negative");
        Ok(())
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config from `path` if present, defaults otherwise. A broken file is
    /// reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("Using default config: {err:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid(), Grid::new(40, 40));
        assert_eq!(config.start, Cell::new(10, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_width": 20, "speed_ramp_factor": 0.9 }"#).unwrap();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 40);
        assert_eq!(config.speed_ramp_factor, 0.9);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = GameConfig::new(20, 20);
        config.start = Cell::new(25, 5);
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.speed_ramp_factor = 1.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.food_max_size = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = std::env::temp_dir();

        let missing = dir.join("pulse_snake_config_missing.json");
        let _ = fs::remove_file(&missing);
        assert_eq!(GameConfig::load_or_default(&missing), GameConfig::default());

        let broken = dir.join("pulse_snake_config_broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(GameConfig::load_or_default(&broken), GameConfig::default());

        let custom = dir.join("pulse_snake_config_custom.json");
        fs::write(&custom, r#"{ "grid_width": 12, "grid_height": 12, "start": { "x": 3, "y": 3 } }"#)
            .unwrap();
        let config = GameConfig::load_or_default(&custom);
        assert_eq!(config.grid(), Grid::new(12, 12));
        assert_eq!(config.start, Cell::new(3, 3));

        let _ = fs::remove_file(&broken);
        let _ = fs::remove_file(&custom);
    }
}
