//! Toroidal grid environment: cells, occupancy, and grass state.

use crate::lifeform::LifeformId;
use crate::population::Population;

/// Glyph for an empty cell
pub const EMPTY_GLYPH: char = '.';
/// Glyph for a cell with grown grass
pub const GRASS_GLYPH: char = '"';

/// A single cell in the grid
#[derive(Clone, Debug, Default)]
pub struct Cell {
    /// Whether grass has grown in this cell
    pub grass: bool,
    /// Handle of the lifeform occupying this cell, if any.
    /// Non-owning: the population registry owns lifeform lifetimes.
    pub occupant: Option<LifeformId>,
}

impl Cell {
    /// Glyph for this cell ignoring any occupant
    pub fn resource_glyph(&self) -> char {
        if self.grass {
            GRASS_GLYPH
        } else {
            EMPTY_GLYPH
        }
    }
}

/// Square toroidal lattice of cells.
///
/// All coordinate arithmetic is performed modulo the side length, so any
/// integer pair addresses a valid cell.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    /// cells[y][x]
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a new empty grid with the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::default(); size]; size],
        }
    }

    /// Side length of the grid
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reduce arbitrary integer coordinates to in-grid coordinates
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        let n = self.size as i64;
        (x.rem_euclid(n) as usize, y.rem_euclid(n) as usize)
    }

    /// Cell at wrapped coordinates
    #[inline]
    pub fn cell(&self, x: i64, y: i64) -> &Cell {
        let (x, y) = self.wrap(x, y);
        &self.cells[y][x]
    }

    /// Mutable cell at wrapped coordinates
    #[inline]
    pub fn cell_mut(&mut self, x: i64, y: i64) -> &mut Cell {
        let (x, y) = self.wrap(x, y);
        &mut self.cells[y][x]
    }

    /// Occupant handle at wrapped coordinates
    #[inline]
    pub fn occupant(&self, x: i64, y: i64) -> Option<LifeformId> {
        self.cell(x, y).occupant
    }

    /// Number of cells with grown grass
    pub fn grass_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.grass)
            .count()
    }

    /// Render the grid as one line of glyphs per row, cells space-separated.
    ///
    /// Occupied cells show the occupant's species glyph, everything else the
    /// resource glyph. Has no side effects.
    pub fn render_rows(&self, population: &Population) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                let glyphs: Vec<String> = row
                    .iter()
                    .map(|cell| {
                        let glyph = cell
                            .occupant
                            .and_then(|id| population.get(id))
                            .map(|lf| lf.species.glyph())
                            .unwrap_or_else(|| cell.resource_glyph());
                        glyph.to_string()
                    })
                    .collect();
                glyphs.join(" ")
            })
            .collect()
    }

    /// Render the full grid projection, rows newline-separated
    pub fn render(&self, population: &Population) -> String {
        self.render_rows(population).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifeform::{Lifeform, Species};

    #[test]
    fn test_wraparound_all_corners() {
        let grid = Grid::new(10);

        // Each corner, stepping off every edge
        assert_eq!(grid.wrap(-1, 0), (9, 0));
        assert_eq!(grid.wrap(0, -1), (0, 9));
        assert_eq!(grid.wrap(10, 0), (0, 0));
        assert_eq!(grid.wrap(0, 10), (0, 0));
        assert_eq!(grid.wrap(-1, 9), (9, 9));
        assert_eq!(grid.wrap(9, 10), (9, 0));
        assert_eq!(grid.wrap(10, 9), (0, 9));
        assert_eq!(grid.wrap(9, -1), (9, 9));
    }

    #[test]
    fn test_any_integer_addresses_a_cell() {
        let mut grid = Grid::new(5);
        grid.cell_mut(-7, 23).grass = true;
        // -7 mod 5 == 3, 23 mod 5 == 3
        assert!(grid.cell(3, 3).grass);
    }

    #[test]
    fn test_render_empty_and_grass() {
        let mut grid = Grid::new(3);
        let population = Population::new();
        grid.cell_mut(1, 0).grass = true;

        let rows = grid.render_rows(&population);
        assert_eq!(rows, vec![". \" .", ". . .", ". . ."]);
    }

    #[test]
    fn test_render_shows_occupants() {
        let mut grid = Grid::new(2);
        let mut population = Population::new();
        let sheep = population.add(Lifeform::new(Species::Sheep, 10, (0, 0)));
        let wolf = population.add(Lifeform::new(Species::Wolf, 14, (1, 1)));
        grid.cell_mut(0, 0).occupant = Some(sheep);
        grid.cell_mut(1, 1).occupant = Some(wolf);

        assert_eq!(grid.render(&population), "S .\n. W");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut grid = Grid::new(4);
        let population = Population::new();
        grid.cell_mut(2, 2).grass = true;

        assert_eq!(grid.render(&population), grid.render(&population));
    }
}
