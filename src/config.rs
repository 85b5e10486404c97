//! Configuration system for the PASTURE simulation.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub world: WorldConfig,
    pub grass: GrassConfig,
    pub sheep: SheepConfig,
    pub wolf: WolfConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

/// World/environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Side length of the square grid
    pub grid_size: usize,
}

/// Grass resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrassConfig {
    /// Per-cell probability of growth per tick (0.0 - 1.0)
    pub growth_rate: f64,
}

/// Sheep species configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheepConfig {
    /// Number of sheep placed at setup
    pub initial_count: usize,
    /// Starting energy for sheep placed at setup
    pub initial_energy: i32,
    /// Energy gained from eating grass
    pub grass_energy: i32,
    /// Energy cost per tick of movement
    pub move_cost: i32,
    /// Minimum energy to reproduce
    pub reproduce_threshold: i32,
    /// Age at which a sheep dies
    pub max_age: u32,
}

/// Wolf species configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WolfConfig {
    /// Number of wolves placed at setup
    pub initial_count: usize,
    /// Starting energy for wolves placed at setup
    pub initial_energy: i32,
    /// Energy gained from eating a sheep
    pub sheep_energy: i32,
    /// Energy cost per tick of movement
    pub move_cost: i32,
    /// Minimum energy to reproduce
    pub reproduce_threshold: i32,
    /// Age at which a wolf dies
    pub max_age: u32,
    /// Per-tick probability of random death (0.0 - 1.0)
    pub death_chance: f64,
}

/// Simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of ticks before the simulation terminates
    pub max_iterations: u64,
    /// Animation pause before each tick, in seconds
    pub timestep_secs: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Ticks between stats history snapshots
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            grass: GrassConfig::default(),
            sheep: SheepConfig::default(),
            wolf: WolfConfig::default(),
            simulation: SimulationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { grid_size: 10 }
    }
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self { growth_rate: 0.05 }
    }
}

impl Default for SheepConfig {
    fn default() -> Self {
        Self {
            initial_count: 5,
            initial_energy: 10,
            grass_energy: 4,
            move_cost: 1,
            reproduce_threshold: 12,
            max_age: 30,
        }
    }
}

impl Default for WolfConfig {
    fn default() -> Self {
        Self {
            initial_count: 10,
            initial_energy: 14,
            sheep_energy: 8,
            move_cost: 1,
            reproduce_threshold: 18,
            max_age: 40,
            death_chance: 0.02,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 3,
            timestep_secs: 0.125,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 1,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.world.grid_size == 0 || self.world.grid_size > 256 {
            return Err("grid_size must be between 1 and 256".to_string());
        }
        if !(0.0..=1.0).contains(&self.grass.growth_rate) {
            return Err("grass growth_rate must be between 0.0 and 1.0".to_string());
        }
        if !(0.0..=1.0).contains(&self.wolf.death_chance) {
            return Err("wolf death_chance must be between 0.0 and 1.0".to_string());
        }
        if self.sheep.initial_energy <= 0 || self.wolf.initial_energy <= 0 {
            return Err("initial_energy must be > 0".to_string());
        }
        if self.sheep.grass_energy <= 0 || self.wolf.sheep_energy <= 0 {
            return Err("feeding energy gains must be > 0".to_string());
        }
        if self.sheep.move_cost <= 0 || self.wolf.move_cost <= 0 {
            return Err("move_cost must be > 0".to_string());
        }
        if self.sheep.reproduce_threshold <= 0 || self.wolf.reproduce_threshold <= 0 {
            return Err("reproduce_threshold must be > 0".to_string());
        }
        if self.sheep.max_age == 0 || self.wolf.max_age == 0 {
            return Err("max_age must be > 0".to_string());
        }
        let cells = self.world.grid_size * self.world.grid_size;
        if self.sheep.initial_count + self.wolf.initial_count > cells {
            return Err(format!(
                "initial population ({} sheep + {} wolves) exceeds grid capacity ({} cells)",
                self.sheep.initial_count, self.wolf.initial_count, cells
            ));
        }
        if self.timestep_duration().is_none() {
            return Err("timestep_secs must be finite and >= 0".to_string());
        }
        if self.logging.stats_interval == 0 {
            return Err("stats_interval must be > 0".to_string());
        }
        Ok(())
    }

    /// Per-tick pause as a `Duration`, or `None` when out of range
    pub fn timestep_duration(&self) -> Option<std::time::Duration> {
        let secs = self.simulation.timestep_secs;
        if secs.is_finite() && secs >= 0.0 {
            Some(std::time::Duration::from_secs_f64(secs))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.world.grid_size, loaded.world.grid_size);
        assert_eq!(config.wolf.reproduce_threshold, loaded.wolf.reproduce_threshold);
    }

    #[test]
    fn test_rejects_zero_grid() {
        let mut config = Config::default();
        config.world.grid_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let mut config = Config::default();
        config.grass.growth_rate = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.wolf.death_chance = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_overfull_grid() {
        let mut config = Config::default();
        config.world.grid_size = 3;
        config.sheep.initial_count = 8;
        config.wolf.initial_count = 8;
        assert!(config.validate().is_err());
    }
}
