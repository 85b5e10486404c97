//! # PASTURE
//!
//! A grass-sheep-wolf ecosystem on a toroidal grid, animated in the
//! terminal.
//!
//! ## Features
//!
//! - **Toroidal world**: movement and growth wrap at every edge
//! - **Three species**: grass as a per-cell resource, sheep grazing it,
//!   wolves hunting the sheep
//! - **Configurable**: YAML configuration files
//! - **Reproducible**: seeded random number generation
//!
//! ## Quick Start
//!
//! ```rust
//! use pasture::{Config, World};
//!
//! let mut config = Config::default();
//! config.simulation.max_iterations = 10;
//!
//! let mut world = World::new_with_seed(config, 42).unwrap();
//! world.run();
//!
//! println!("Sheep: {}", world.stats.sheep);
//! println!("Wolves: {}", world.stats.wolves);
//! ```

pub mod config;
pub mod display;
pub mod grid;
pub mod lifeform;
pub mod population;
pub mod stats;
pub mod world;

// Re-export main types
pub use config::Config;
pub use lifeform::{Lifeform, Species};
pub use world::World;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
