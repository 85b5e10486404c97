//! Lifeform species and per-tick behavior.
//!
//! Sheep and wolves share one fixed action sequence (`act`): upkeep, move,
//! eat, reproduce, survive. Grass is not an individual lifeform; its two
//! global operations live in the [`grass`] module and are driven once per
//! tick by the world.

use crate::config::Config;
use crate::grid::Grid;
use crate::population::Population;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unique lifeform handle, assigned by the population registry
pub type LifeformId = u64;

/// The four orthogonal movement offsets
pub const DIRECTIONS: [(i64, i64); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Lifeform species tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Sheep,
    Wolf,
}

impl Species {
    /// Display glyph for this species
    pub fn glyph(self) -> char {
        match self {
            Species::Sheep => 'S',
            Species::Wolf => 'W',
        }
    }

    fn move_cost(self, config: &Config) -> i32 {
        match self {
            Species::Sheep => config.sheep.move_cost,
            Species::Wolf => config.wolf.move_cost,
        }
    }

    fn reproduce_threshold(self, config: &Config) -> i32 {
        match self {
            Species::Sheep => config.sheep.reproduce_threshold,
            Species::Wolf => config.wolf.reproduce_threshold,
        }
    }

    fn max_age(self, config: &Config) -> u32 {
        match self {
            Species::Sheep => config.sheep.max_age,
            Species::Wolf => config.wolf.max_age,
        }
    }
}

/// A sheep or wolf in the simulation
#[derive(Clone, Debug)]
pub struct Lifeform {
    /// Registry handle, assigned on add
    pub id: LifeformId,
    pub species: Species,
    /// Grid position; `None` once dead
    pub location: Option<(usize, usize)>,
    pub energy: i32,
    pub age: u32,
    /// Sheep targeted by a wolf's move this tick
    pub last_prey: Option<LifeformId>,
}

impl Lifeform {
    /// Create a lifeform at the given position with the given energy
    pub fn new(species: Species, energy: i32, location: (usize, usize)) -> Self {
        Self {
            id: 0,
            species,
            location: Some(location),
            energy,
            age: 0,
            last_prey: None,
        }
    }
}

/// Run one full action sequence for the lifeform with the given handle.
///
/// The order is fixed: upkeep (age and move cost), move, eat, reproduce,
/// survive. A handle that no longer resolves (the lifeform died or was
/// eaten earlier this tick) is inert.
pub fn act(
    id: LifeformId,
    grid: &mut Grid,
    population: &mut Population,
    rng: &mut impl Rng,
    config: &Config,
) {
    let Some(lifeform) = population.get_mut(id) else {
        return;
    };
    if lifeform.location.is_none() {
        return;
    }

    let species = lifeform.species;
    lifeform.age += 1;
    lifeform.energy -= species.move_cost(config);

    move_step(id, species, grid, population, rng);
    eat(id, species, grid, population, config);
    reproduce(id, species, grid, population, rng, config);
    survive(id, species, grid, population, rng, config);
}

/// Move to a uniformly chosen orthogonal neighbor.
///
/// A cell occupied by a non-prey lifeform blocks the move. A wolf may enter
/// a sheep's cell, recording the sheep as this tick's prey; the sheep still
/// claims the cell until the wolf's eat step removes it.
fn move_step(
    id: LifeformId,
    species: Species,
    grid: &mut Grid,
    population: &mut Population,
    rng: &mut impl Rng,
) {
    let Some((x, y)) = population.get(id).and_then(|lf| lf.location) else {
        return;
    };

    let (dx, dy) = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
    let (nx, ny) = grid.wrap(x as i64 + dx, y as i64 + dy);
    let target = grid.occupant(nx as i64, ny as i64);

    let prey = match species {
        Species::Wolf => target.filter(|&other| {
            population
                .get(other)
                .map_or(false, |lf| lf.species == Species::Sheep)
        }),
        Species::Sheep => None,
    };
    if let Some(lifeform) = population.get_mut(id) {
        lifeform.last_prey = prey;
    }

    if target.is_some() && prey.is_none() {
        return;
    }

    grid.cell_mut(x as i64, y as i64).occupant = None;
    grid.cell_mut(nx as i64, ny as i64).occupant = Some(id);
    if let Some(lifeform) = population.get_mut(id) {
        lifeform.location = Some((nx, ny));
    }
}

/// Species-specific feeding.
///
/// Sheep clear grown grass on their own cell for energy. Wolves consume the
/// prey recorded during this tick's move, removing it from the registry.
fn eat(
    id: LifeformId,
    species: Species,
    grid: &mut Grid,
    population: &mut Population,
    config: &Config,
) {
    match species {
        Species::Sheep => {
            let Some((x, y)) = population.get(id).and_then(|lf| lf.location) else {
                return;
            };
            let cell = grid.cell_mut(x as i64, y as i64);
            if cell.grass {
                cell.grass = false;
                if let Some(lifeform) = population.get_mut(id) {
                    lifeform.energy += config.sheep.grass_energy;
                }
            }
        }
        Species::Wolf => {
            let Some(prey) = population.get_mut(id).and_then(|lf| lf.last_prey.take()) else {
                return;
            };
            // The wolf already occupies the prey's cell; only the registry
            // entry is left to clear.
            if population.remove(prey).is_some() {
                if let Some(lifeform) = population.get_mut(id) {
                    lifeform.energy += config.wolf.sheep_energy;
                }
            }
        }
    }
}

/// Attempt one offspring placement in the first empty orthogonal neighbor,
/// visiting the four directions in a freshly shuffled order.
///
/// The child receives floor(E/2) of the parent's energy; the parent keeps
/// the remainder. No empty neighbor means no reproduction this tick.
fn reproduce(
    id: LifeformId,
    species: Species,
    grid: &mut Grid,
    population: &mut Population,
    rng: &mut impl Rng,
    config: &Config,
) {
    let (energy, location) = match population.get(id) {
        Some(lifeform) => (lifeform.energy, lifeform.location),
        None => return,
    };
    let Some((x, y)) = location else {
        return;
    };
    if energy < species.reproduce_threshold(config) {
        return;
    }

    let mut directions = DIRECTIONS;
    directions.shuffle(rng);

    for (dx, dy) in directions {
        let (nx, ny) = grid.wrap(x as i64 + dx, y as i64 + dy);
        if grid.occupant(nx as i64, ny as i64).is_some() {
            continue;
        }

        let Some(parent) = population.get_mut(id) else {
            return;
        };
        let child_energy = parent.energy / 2;
        parent.energy -= child_energy;

        let child = population.add(Lifeform::new(species, child_energy, (nx, ny)));
        grid.cell_mut(nx as i64, ny as i64).occupant = Some(child);
        return;
    }
}

/// Death check: energy depleted, max age reached, or (wolves only) a random
/// death-chance draw. The dead lifeform's cell is vacated and its registry
/// entry removed.
fn survive(
    id: LifeformId,
    species: Species,
    grid: &mut Grid,
    population: &mut Population,
    rng: &mut impl Rng,
    config: &Config,
) {
    let Some(lifeform) = population.get(id) else {
        return;
    };

    let dead = lifeform.energy <= 0
        || lifeform.age >= species.max_age(config)
        || match species {
            Species::Wolf => rng.gen_bool(config.wolf.death_chance),
            Species::Sheep => false,
        };
    if !dead {
        return;
    }

    if let Some(removed) = population.remove(id) {
        if let Some((x, y)) = removed.location {
            grid.cell_mut(x as i64, y as i64).occupant = None;
        }
    }
}

/// Global grass operations, driven once per tick by the world.
pub mod grass {
    use super::Species;
    use crate::grid::Grid;
    use crate::population::Population;
    use rand::Rng;

    /// Grow grass: every unoccupied, empty cell independently becomes grown
    /// with probability `growth_rate`.
    pub fn grow(grid: &mut Grid, growth_rate: f64, rng: &mut impl Rng) {
        let size = grid.size() as i64;
        for y in 0..size {
            for x in 0..size {
                let cell = grid.cell_mut(x, y);
                if cell.occupant.is_none() && !cell.grass && rng.gen_bool(growth_rate) {
                    cell.grass = true;
                }
            }
        }
    }

    /// Sweep grown grass out of every cell occupied by a sheep.
    ///
    /// Sheep already clear their own cell in the eat step; both passes run
    /// every tick, so grass never persists under a sheep.
    pub fn consume(grid: &mut Grid, population: &Population) {
        let size = grid.size() as i64;
        for y in 0..size {
            for x in 0..size {
                let cell = grid.cell(x, y);
                if !cell.grass {
                    continue;
                }
                let sheep_here = cell
                    .occupant
                    .and_then(|id| population.get(id))
                    .map_or(false, |lf| lf.species == Species::Sheep);
                if sheep_here {
                    grid.cell_mut(x, y).grass = false;
                }
            }
        }
    }
}
