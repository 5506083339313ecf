use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gridsweep_core::{BoardSize, CellCount, CellGeometry, Coord, GameConfig, Pixel};
use serde::{Deserialize, Serialize};

/// Match and surface settings, read from TOML with every field optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub num_rows: Coord,
    pub num_columns: Coord,
    pub num_mines: CellCount,
    /// `None` draws a new seed for every match.
    pub seed: Option<u64>,
    pub grid_width: Pixel,
    pub grid_height: Pixel,
    /// Derived from the grid surface when unset.
    pub cell_width: Option<Pixel>,
    pub cell_height: Option<Pixel>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_rows: 100,
            num_columns: 100,
            num_mines: 50,
            seed: Some(1),
            grid_width: 1080,
            grid_height: 800,
            cell_width: None,
            cell_height: None,
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        let settings = toml::from_str(&text)
            .with_context(|| format!("Could not parse settings in {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.num_rows, self.num_columns)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.num_mines,
            seed: self.seed,
        }
    }

    pub fn geometry(&self) -> Result<CellGeometry> {
        let (width, height) = match (self.cell_width, self.cell_height) {
            (Some(width), Some(height)) => (width, height),
            (width, height) => {
                let fitted = CellGeometry::fit(self.size(), self.grid_width, self.grid_height)
                    .context("Grid surface cannot hold the board")?;
                (
                    width.unwrap_or(fitted.cell_width),
                    height.unwrap_or(fitted.cell_height),
                )
            }
        };
        Ok(CellGeometry::new(width, height)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings =
            toml::from_str("num_rows = 9\nnum_columns = 9\nnum_mines = 10\n").unwrap();

        assert_eq!(settings.game_config(), GameConfig::new(9, 9, 10).with_seed(1));
        assert_eq!(settings.grid_width, 1080);
    }

    #[test]
    fn cell_size_is_derived_from_the_surface() {
        let settings = Settings::default();

        assert_eq!(settings.geometry().unwrap(), CellGeometry::new(10, 8).unwrap());
    }

    #[test]
    fn explicit_cell_size_wins() {
        let settings = Settings {
            cell_width: Some(16),
            ..Settings::default()
        };

        let geometry = settings.geometry().unwrap();

        assert_eq!(geometry.cell_width, 16);
        assert_eq!(geometry.cell_height, 8);
    }

    #[test]
    fn explicit_cell_size_fits_boards_larger_than_the_surface() {
        let settings = Settings {
            num_rows: 1000,
            num_columns: 2000,
            cell_width: Some(4),
            cell_height: Some(4),
            ..Settings::default()
        };

        assert_eq!(settings.geometry().unwrap(), CellGeometry::new(4, 4).unwrap());
    }

    #[test]
    fn unknown_types_are_reported() {
        let result: Result<Settings, _> = toml::from_str("num_rows = \"many\"");

        assert!(result.is_err());
    }
}
