//! # Generation Module
//!
//! Procedural content generation for dungeons, items and encounters.
//!
//! Generation runs as a one-way pipeline: the maze generator lays out and
//! links the grid, the encounter module picks the start and end caves, then
//! populators scatter treasure, arrows and Otyughs. Every random choice is
//! drawn from the injected [`Randomizer`].

pub mod dungeon;
pub mod encounters;
pub mod items;

pub use dungeon::*;
pub use encounters::*;
pub use items::*;

use crate::config;
use crate::{LocationGraph, Randomizer, WarrenError, WarrenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for building a dungeon.
///
/// Loadable from JSON; missing fields fall back to [`GenerationConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub columns: usize,
    /// Extra edges added on top of the spanning tree
    pub interconnectivity: usize,
    /// Minimum percentage of caves holding treasure (0 to 100)
    pub treasure_percent: u32,
    /// Whether edge rows and columns wrap around to the opposite side
    pub wrapping: bool,
    /// Number of Otyughs, including the one in the end cave
    pub monster_count: usize,
    /// Name given to the player
    pub player_name: String,
}

impl GenerationConfig {
    /// Creates a configuration from the six construction parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(5, 4, 2, 20, false, 5);
    /// assert_eq!(config.rows, 5);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(
        rows: usize,
        columns: usize,
        interconnectivity: usize,
        treasure_percent: u32,
        wrapping: bool,
        monster_count: usize,
    ) -> Self {
        Self {
            rows,
            columns,
            interconnectivity,
            treasure_percent,
            wrapping,
            monster_count,
            player_name: config::DEFAULT_PLAYER_NAME.to_string(),
        }
    }

    /// Creates a small but always feasible configuration for tests.
    pub fn for_testing() -> Self {
        Self::new(5, 4, 2, 20, false, 5)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> WarrenResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> WarrenResult<Self> {
        serde_json::from_str(json).map_err(WarrenError::from)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json(&self) -> WarrenResult<String> {
        serde_json::to_string_pretty(self).map_err(WarrenError::from)
    }

    /// Checks the bounds that can be verified without building anything.
    ///
    /// Feasibility (enough extra edges, enough caves, a distant enough end
    /// cave) is only known during generation and is reported there.
    pub fn validate(&self) -> WarrenResult<()> {
        if self.rows == 0 {
            return Err(WarrenError::InvalidConfig(
                "Number of rows must be positive".to_string(),
            ));
        }
        if self.columns == 0 {
            return Err(WarrenError::InvalidConfig(
                "Number of columns must be positive".to_string(),
            ));
        }
        match self.rows.checked_mul(self.columns) {
            Some(cells) if cells <= config::MAX_CELLS => {}
            _ => {
                return Err(WarrenError::InvalidConfig(format!(
                    "A {}x{} grid exceeds the limit of {} cells",
                    self.rows,
                    self.columns,
                    config::MAX_CELLS
                )))
            }
        }
        if self.treasure_percent > 100 {
            return Err(WarrenError::InvalidConfig(format!(
                "Treasure percent {} is outside 0-100",
                self.treasure_percent
            )));
        }
        if self.monster_count < 1 {
            return Err(WarrenError::InvalidConfig(
                "Monster count should be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of grid cells, saturating for oversized grids that
    /// [`validate`](Self::validate) rejects.
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(
            config::DEFAULT_ROWS,
            config::DEFAULT_COLUMNS,
            config::DEFAULT_INTERCONNECTIVITY,
            config::DEFAULT_TREASURE_PERCENT,
            false,
            config::DEFAULT_MONSTER_COUNT,
        )
    }
}

/// Trait for procedural generators producing a new piece of content.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random source.
    fn generate(&self, config: &GenerationConfig, rng: &mut dyn Randomizer) -> WarrenResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WarrenResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Trait for stages that stock an already linked graph.
pub trait Populator {
    /// Places this populator's content onto `graph`.
    fn populate(&self, graph: &mut LocationGraph, rng: &mut dyn Randomizer) -> WarrenResult<()>;

    /// Gets the populator type name for logging and debugging.
    fn populator_type(&self) -> &'static str;
}

/// Draws the effective treasure/arrow percentage: the configured value
/// raised by a random amount, capped at 100.
pub fn effective_percent(treasure_percent: u32, rng: &mut dyn Randomizer) -> u32 {
    let bump = rng.next_int(0, 100u32.saturating_sub(treasure_percent));
    treasure_percent.saturating_add(bump).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedRandomizer;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(3, 7, 1, 40, true, 2);
        assert_eq!(config.rows, 3);
        assert_eq!(config.columns, 7);
        assert_eq!(config.interconnectivity, 1);
        assert_eq!(config.treasure_percent, 40);
        assert!(config.wrapping);
        assert_eq!(config.monster_count, 2);
        assert_eq!(config.cell_count(), 21);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GenerationConfig::default().validate().is_ok());
        assert!(GenerationConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_bounds() {
        let cases = vec![
            GenerationConfig::new(0, 4, 2, 20, false, 5),
            GenerationConfig::new(5, 0, 2, 20, false, 5),
            GenerationConfig::new(5, 4, 2, 110, false, 5),
            GenerationConfig::new(5, 4, 2, 20, false, 0),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(WarrenError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_validation_rejects_oversized_grids() {
        let cases = vec![
            GenerationConfig::new(usize::MAX / 2 + 1, 4, 0, 20, false, 1),
            GenerationConfig::new(usize::MAX, usize::MAX, 0, 20, true, 1),
            GenerationConfig::new(config::MAX_CELLS, 2, 0, 20, false, 1),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(WarrenError::InvalidConfig(_))
            ));
            let rng = FixedRandomizer::new(vec![2]).unwrap();
            assert!(matches!(
                crate::Dungeon::new(&config, Box::new(rng)),
                Err(WarrenError::InvalidConfig(_))
            ));
        }
        assert!(GenerationConfig::new(1000, 1000, 0, 20, false, 1)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_json_round_trip_and_defaults() {
        let config = GenerationConfig::new(7, 9, 4, 35, true, 4);
        let parsed = GenerationConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);

        let partial = GenerationConfig::from_json(r#"{ "rows": 10, "wrapping": true }"#).unwrap();
        assert_eq!(partial.rows, 10);
        assert!(partial.wrapping);
        assert_eq!(partial.columns, config::DEFAULT_COLUMNS);
    }

    #[test]
    fn test_json_rejects_negative_values() {
        assert!(matches!(
            GenerationConfig::from_json(r#"{ "rows": -1 }"#),
            Err(WarrenError::Serde(_))
        ));
    }

    #[test]
    fn test_effective_percent() {
        let mut rng = FixedRandomizer::new(vec![2]).unwrap();
        assert_eq!(effective_percent(20, &mut rng), 22);

        let mut rng = FixedRandomizer::new(vec![10]).unwrap();
        assert_eq!(effective_percent(95, &mut rng), 100);
    }
}
