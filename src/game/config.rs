use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Widest grid whose framed board, two terminal columns per cell, still fits a `u16` row
pub const MAX_GRID_WIDTH: usize = (u16::MAX as usize - 2) / 2;
/// Tallest grid whose framed board still fits a `u16` column
pub const MAX_GRID_HEIGHT: usize = u16::MAX as usize - 2;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used to draw the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    /// Outline drawn around every occupied cell
    pub border: Rgb,
    pub apple: Rgb,
    pub stone: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            apple: Rgb(255, 0, 0),
            stone: Rgb(128, 128, 128),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playfield in screen units
    pub screen_width: u32,
    /// Height of the playfield in screen units
    pub screen_height: u32,
    /// Side of one grid cell in screen units
    pub cell_size: u32,
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            ticks_per_second: 15,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration whose grid is `width` x `height` cells
    pub fn with_grid(width: u32, height: u32) -> Self {
        let defaults = Self::default();
        Self {
            screen_width: width * defaults.cell_size,
            screen_height: height * defaults.cell_size,
            ..defaults
        }
    }

    /// Read a JSON configuration file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Number of grid columns
    pub fn grid_width(&self) -> usize {
        (self.screen_width / self.cell_size.max(1)) as usize
    }

    /// Number of grid rows
    pub fn grid_height(&self) -> usize {
        (self.screen_height / self.cell_size.max(1)) as usize
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.screen_width % self.cell_size == 0 && self.screen_height % self.cell_size == 0,
            "screen {}x{} is not a whole number of {}-unit cells",
            self.screen_width,
            self.screen_height,
            self.cell_size
        );
        ensure!(
            self.grid_width() <= MAX_GRID_WIDTH && self.grid_height() <= MAX_GRID_HEIGHT,
            "grid {}x{} exceeds the {}x{} limit",
            self.grid_width(),
            self.grid_height(),
            MAX_GRID_WIDTH,
            MAX_GRID_HEIGHT
        );
        // snake start, apple and stone each need a cell of their own
        ensure!(
            self.grid_width() * self.grid_height() >= 3,
            "grid {}x{} is too small to hold a snake, an apple and a stone",
            self.grid_width(),
            self.grid_height()
        );
        ensure!(self.ticks_per_second > 0, "ticks_per_second must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width(), 32);
        assert_eq!(config.grid_height(), 24);
        assert_eq!(config.ticks_per_second, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_grid() {
        let config = GameConfig::with_grid(6, 4);
        assert_eq!(config.grid_width(), 6);
        assert_eq!(config.grid_height(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let uneven = GameConfig {
            screen_width: 650,
            ..GameConfig::default()
        };
        assert!(uneven.validate().is_err());

        let no_ticks = GameConfig {
            ticks_per_second: 0,
            ..GameConfig::default()
        };
        assert!(no_ticks.validate().is_err());

        assert!(GameConfig::with_grid(1, 2).validate().is_err());

        let zero_cells = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };
        assert!(zero_cells.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let too_wide = GameConfig {
            screen_width: 40_000,
            screen_height: 1,
            cell_size: 1,
            ..GameConfig::default()
        };
        assert!(too_wide.validate().is_err());

        let wraps_i32 = GameConfig {
            screen_width: 3_000_000_000,
            screen_height: 1,
            cell_size: 1,
            ..GameConfig::default()
        };
        assert!(wraps_i32.validate().is_err());

        let too_tall = GameConfig {
            screen_width: 3,
            screen_height: 70_000,
            cell_size: 1,
            ..GameConfig::default()
        };
        assert!(too_tall.validate().is_err());

        let largest = GameConfig {
            screen_width: MAX_GRID_WIDTH as u32,
            screen_height: MAX_GRID_HEIGHT as u32,
            cell_size: 1,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "ticks_per_second": 10, "palette": {{ "snake": [1, 2, 3] }} }}"#
        )
        .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.ticks_per_second, 10);
        assert_eq!(config.grid_width(), 32);
        assert_eq!(config.palette.snake, Rgb(1, 2, 3));
        assert_eq!(config.palette.apple, Palette::default().apple);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cell_size": 0 }}"#).unwrap();
        assert!(GameConfig::load(file.path()).is_err());

        let missing = Path::new("/definitely/not/here.json");
        assert!(GameConfig::load(missing).is_err());
    }
}
