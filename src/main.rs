use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use snake_sim::game::SimConfig;
use snake_sim::modes::{CheckConfig, CheckMode};
use snake_sim::observation::ObservationMode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "snake_sim")]
#[command(version, about = "Deterministic snake simulation for RL environments")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play episodes with a random agent and log the scores
    Check {
        /// Number of episodes to play
        #[arg(long, default_value = "10")]
        episodes: usize,

        /// Maximum ticks per episode
        #[arg(long, default_value = "10000")]
        max_steps: u64,

        /// JSON file with grid size, tile size and seed
        #[arg(long)]
        config: Option<PathBuf>,

        /// Grid width in tiles
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in tiles
        #[arg(long)]
        height: Option<usize>,

        /// Coordinate units per tile
        #[arg(long)]
        tile_size: Option<i32>,

        /// Seed for food placement and the random agent
        #[arg(long)]
        seed: Option<u64>,

        /// Observation encoder to run on every tick
        #[arg(long, default_value = "vector")]
        observation: Observation,

        /// Append the last actions to vector observations
        #[arg(long)]
        history: bool,

        /// Write every tick as a JSON line to this file
        #[arg(long)]
        trace: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum Observation {
    /// Head, food and length features
    Vector,
    /// Single-channel grid image
    Image,
}

impl From<Observation> for ObservationMode {
    fn from(observation: Observation) -> Self {
        match observation {
            Observation::Vector => ObservationMode::Vector,
            Observation::Image => ObservationMode::Image,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Check {
            episodes,
            max_steps,
            config,
            width,
            height,
            tile_size,
            seed,
            observation,
            history,
            trace,
        } => {
            let mut sim_config = match config {
                Some(path) => SimConfig::from_json_file(&path)?,
                None => SimConfig::default(),
            };
            if let Some(width) = width {
                sim_config.grid_width = width;
            }
            if let Some(height) = height {
                sim_config.grid_height = height;
            }
            if let Some(tile_size) = tile_size {
                sim_config.tile_size = tile_size;
            }
            if let Some(seed) = seed {
                sim_config.seed = seed;
            }

            let check_config = CheckConfig {
                max_steps,
                sim_config,
                observation: observation.into(),
                with_history: history,
                trace_path: trace,
                ..CheckConfig::new(episodes)
            };

            let stats = CheckMode::new(check_config)?.run()?;

            println!(
                "Played {} games: high score {}, mean score {:.2}, {} ticks",
                stats.games_played,
                stats.high_score,
                stats.mean_score(),
                stats.total_ticks
            );
        }
    }

    Ok(())
}
