use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Bounds;

/// Reasons a configuration cannot describe a playable grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tile_size must be positive, got {0}")]
    InvalidTileSize(i32),
    #[error("grid must be at least 2x2 tiles, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },
    #[error("grid of {width}x{height} tiles of size {tile_size} overflows coordinate space")]
    GridTooLarge {
        width: usize,
        height: usize,
        tile_size: i32,
    },
}

/// Configuration for the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Width of the grid in tiles
    pub grid_width: usize,
    /// Height of the grid in tiles
    pub grid_height: usize,
    /// Coordinate units per tile
    pub tile_size: i32,
    /// Seed for food placement
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: 50,
            grid_height: 50,
            tile_size: 10,
            seed: 23,
        }
    }
}

impl SimConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(100, 100)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Grid extent in coordinate units, saturating at `i32::MAX` for grids
    /// that `validate` would reject as too large
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            Self::extent(self.grid_width, self.tile_size).unwrap_or(i32::MAX),
            Self::extent(self.grid_height, self.tile_size).unwrap_or(i32::MAX),
        )
    }

    /// Check that the grid is playable
    ///
    /// Food needs at least two tiles per axis to have anywhere to go.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }

        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if Self::extent(self.grid_width, self.tile_size).is_none()
            || Self::extent(self.grid_height, self.tile_size).is_none()
        {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                tile_size: self.tile_size,
            });
        }

        Ok(())
    }

    /// Tile count times tile size, `None` if it does not fit in an `i32`
    fn extent(tiles: usize, tile_size: i32) -> Option<i32> {
        i32::try_from(tiles).ok()?.checked_mul(tile_size)
    }

    /// Load a configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: SimConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        Ok(config)
    }
}
