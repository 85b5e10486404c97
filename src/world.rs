//! World orchestration: setup and the main tick loop.

use crate::config::Config;
use crate::grid::Grid;
use crate::lifeform::{self, grass, Lifeform, Species};
use crate::population::Population;
use crate::stats::{Stats, StatsHistory};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// The simulation world
pub struct World {
    /// Toroidal environment
    pub grid: Grid,
    /// Live sheep and wolves
    pub lifeforms: Population,
    /// Completed ticks
    pub time: u64,
    /// Configuration
    pub config: Config,
    /// Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,

    terminated: bool,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,

    births_this_tick: usize,
    deaths_this_tick: usize,
}

impl World {
    /// Create a new world with the given configuration and a random seed
    pub fn new(config: Config) -> Result<Self, String> {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a new world with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Result<Self, String> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::new(config.world.grid_size);
        let mut lifeforms = Population::new();

        // Setup order: grass first, then sheep, then wolves.
        grass::grow(&mut grid, config.grass.growth_rate, &mut rng);
        place_species(
            &mut grid,
            &mut lifeforms,
            &mut rng,
            Species::Sheep,
            config.sheep.initial_count,
            config.sheep.initial_energy,
        );
        place_species(
            &mut grid,
            &mut lifeforms,
            &mut rng,
            Species::Wolf,
            config.wolf.initial_count,
            config.wolf.initial_energy,
        );

        log::info!(
            "world ready: {}x{} grid, {} sheep, {} wolves, seed {}",
            config.world.grid_size,
            config.world.grid_size,
            config.sheep.initial_count,
            config.wolf.initial_count,
            seed
        );

        let mut world = Self {
            grid,
            lifeforms,
            time: 0,
            config: config.clone(),
            stats: Stats::new(),
            stats_history: StatsHistory::new(config.logging.stats_interval),
            terminated: false,
            rng,
            seed,
            births_this_tick: 0,
            deaths_this_tick: 0,
        };
        world.update_stats();
        Ok(world)
    }

    /// Run one simulation tick.
    ///
    /// Sequence: grass growth, per-lifeform action dispatch over a snapshot
    /// of the registry in insertion order, grass consumption sweep, stats.
    /// Once the iteration bound is reached the world is terminated and
    /// further calls are no-ops.
    pub fn step(&mut self) {
        if self.terminated {
            return;
        }
        if self.time >= self.config.simulation.max_iterations {
            self.terminated = true;
            return;
        }

        grass::grow(&mut self.grid, self.config.grass.growth_rate, &mut self.rng);

        // Lifeforms added during the loop (offspring) are not in the
        // snapshot and act for the first time next tick; removed ones
        // (eaten or dead) fail to resolve and are skipped.
        let snapshot = self.lifeforms.snapshot();
        for id in snapshot.iter().copied() {
            lifeform::act(id, &mut self.grid, &mut self.lifeforms, &mut self.rng, &self.config);
        }

        grass::consume(&mut self.grid, &self.lifeforms);

        self.time += 1;
        self.deaths_this_tick = snapshot
            .iter()
            .filter(|&&id| !self.lifeforms.contains(id))
            .count();
        // Offspring are the only members that have not aged yet.
        self.births_this_tick = self.lifeforms.iter().filter(|lf| lf.age == 0).count();
        self.update_stats();

        if self.deaths_this_tick > 0 && self.lifeforms.is_empty() {
            log::info!("population extinct at tick {}", self.time);
        }

        log::debug!("{}", self.stats.summary());

        if self.time >= self.config.simulation.max_iterations {
            self.terminated = true;
            log::info!("simulation terminated after {} iterations", self.time);
        }
    }

    /// Step until the iteration bound is reached
    pub fn run(&mut self) {
        while !self.terminated {
            self.step();
        }
    }

    /// The frame handed to the rendering collaborator: a header line plus
    /// the grid projection.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Round {}", self.time)];
        lines.extend(self.grid.render_rows(&self.lifeforms));
        lines
    }

    /// Whether the iteration bound has been reached
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Current population count
    pub fn population(&self) -> usize {
        self.lifeforms.len()
    }

    /// Check if the population is extinct
    pub fn is_extinct(&self) -> bool {
        self.lifeforms.is_empty()
    }

    /// Get seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn update_stats(&mut self) {
        self.stats.time = self.time;
        self.stats.births = self.births_this_tick;
        self.stats.deaths = self.deaths_this_tick;
        self.stats.update(&self.lifeforms, self.grid.grass_count());

        if self.time % self.config.logging.stats_interval == 0 {
            self.stats_history.record(self.stats.clone());
        }
    }
}

/// Place `count` lifeforms of one species on random empty cells
fn place_species(
    grid: &mut Grid,
    lifeforms: &mut Population,
    rng: &mut ChaCha8Rng,
    species: Species,
    count: usize,
    energy: i32,
) {
    let size = grid.size();
    for _ in 0..count {
        let (x, y) = loop {
            let x = rng.gen_range(0..size);
            let y = rng.gen_range(0..size);
            if grid.occupant(x as i64, y as i64).is_none() {
                break (x, y);
            }
        };
        let id = lifeforms.add(Lifeform::new(species, energy, (x, y)));
        grid.cell_mut(x as i64, y as i64).occupant = Some(id);
    }
}
