//! Statistics tracking for the simulation.

use crate::lifeform::Species;
use crate::population::Population;
use serde::{Deserialize, Serialize};

/// Statistics snapshot for a simulation tick
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Current simulation tick
    pub time: u64,
    /// Live sheep count
    pub sheep: usize,
    /// Live wolf count
    pub wolves: usize,
    /// Cells with grown grass
    pub grass_cells: usize,
    /// Mean energy across live lifeforms
    pub energy_mean: f64,
    /// Mean age across live lifeforms
    pub age_mean: f64,
    /// Births this tick
    pub births: usize,
    /// Deaths this tick
    pub deaths: usize,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from the current simulation state
    pub fn update(&mut self, population: &Population, grass_cells: usize) {
        self.sheep = population
            .iter()
            .filter(|lf| lf.species == Species::Sheep)
            .count();
        self.wolves = population
            .iter()
            .filter(|lf| lf.species == Species::Wolf)
            .count();
        self.grass_cells = grass_cells;

        let total = population.len();
        if total == 0 {
            self.energy_mean = 0.0;
            self.age_mean = 0.0;
        } else {
            self.energy_mean =
                population.iter().map(|lf| lf.energy as f64).sum::<f64>() / total as f64;
            self.age_mean = population.iter().map(|lf| lf.age as f64).sum::<f64>() / total as f64;
        }
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "T:{:4} | Sheep:{:4} | Wolves:{:4} | Grass:{:4} | Energy:{:.1} | Age:{:.1} | +{} -{}",
            self.time,
            self.sheep,
            self.wolves,
            self.grass_cells,
            self.energy_mean,
            self.age_mean,
            self.births,
            self.deaths,
        )
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
    /// Recording interval
    pub interval: u64,
}

impl StatsHistory {
    /// Create new history with recording interval
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// Get sheep and wolf counts over time
    pub fn population_series(&self) -> Vec<(u64, usize, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.time, s.sheep, s.wolves))
            .collect()
    }

    /// Get grass coverage over time
    pub fn grass_series(&self) -> Vec<(u64, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.time, s.grass_cells))
            .collect()
    }

    /// Save history to a JSON file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)
    }

    /// Load history from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
