//! construction parameters for a [HamiltonianCycle](crate::HamiltonianCycle)
use serde::{Deserialize, Serialize};

use crate::dimensions::GridDimensions;
use crate::error::GridError;

/// Configuration for building a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// number of fine columns, must be even
    pub cols: usize,
    /// number of fine rows, must be even
    pub rows: usize,
    /// seed for the maze generator. Without one every build draws a fresh maze
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 30,
            seed: None,
        }
    }
}

impl CycleConfig {
    /// Create a new configuration with custom grid size and no seed
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            ..Default::default()
        }
    }

    /// the same configuration, replaying the maze drawn from `seed`
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// validates the grid size
    pub fn dimensions(&self) -> Result<GridDimensions, GridError> {
        GridDimensions::new(self.cols, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CycleConfig::default();
        assert_eq!(config.cols, 30);
        assert_eq!(config.rows, 30);
        assert_eq!(config.seed, None);
        assert!(config.dimensions().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = CycleConfig::new(8, 6).with_seed(9);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.dimensions().unwrap().cell_count(), 48);
        assert_eq!(
            CycleConfig::new(7, 6).dimensions(),
            Err(GridError::OddDimension { cols: 7, rows: 6 })
        );
    }

    #[test]
    fn test_seed_is_optional_in_json() {
        let config: CycleConfig = serde_json::from_str(r#"{"cols": 4, "rows": 2}"#).unwrap();
        assert_eq!(config, CycleConfig::new(4, 2));
        let json = serde_json::to_string(&config.with_seed(3)).unwrap();
        let back: CycleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(3));
    }
}
