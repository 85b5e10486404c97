//! PASTURE - CLI entry point
//!
//! Animated grass-sheep-wolf ecosystem simulation.

use clap::{Parser, Subcommand};
use pasture::display::DynamicTerminal;
use pasture::{Config, World};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pasture")]
#[command(version)]
#[command(about = "Grass-sheep-wolf ecosystem animated in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Override the configured iteration count
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Skip terminal animation and pacing, print per-tick stats instead
        #[arg(long)]
        headless: bool,

        /// Write the stats history to this JSON file at the end
        #[arg(long)]
        stats_out: Option<PathBuf>,
    },

    /// Generate a default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            iterations,
            seed,
            headless,
            stats_out,
        } => run_simulation(config, iterations, seed, headless, stats_out),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_simulation(
    config_path: PathBuf,
    iterations: Option<u64>,
    seed: Option<u64>,
    headless: bool,
    stats_out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = if config_path.exists() {
        Config::from_file(&config_path)?
    } else {
        Config::default()
    };
    if let Some(n) = iterations {
        config.simulation.max_iterations = n;
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();

    let mut world = match seed {
        Some(s) => World::new_with_seed(config.clone(), s)?,
        None => World::new(config.clone())?,
    };

    if headless {
        while !world.is_terminated() {
            world.step();
            println!("{}", world.stats.summary());
        }
    } else {
        let pause = config.timestep_duration().unwrap_or_default();
        // One header line plus one line per grid row
        let rows = (config.world.grid_size + 1) as u16;
        let mut terminal = DynamicTerminal::new(rows)?;
        terminal.render(&world.render_lines())?;

        while !world.is_terminated() {
            std::thread::sleep(pause);
            world.step();
            terminal.render(&world.render_lines())?;
        }
    }

    println!("The simulation has terminated after {} iterations.", world.time);
    println!(
        "Final population: {} sheep, {} wolves, {} grass cells (seed {})",
        world.stats.sheep,
        world.stats.wolves,
        world.stats.grass_cells,
        world.seed()
    );

    if let Some(path) = stats_out {
        let path = path.to_string_lossy();
        world.stats_history.save(&path)?;
        println!("Stats history: {}", path);
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
