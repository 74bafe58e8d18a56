//! Check mode: drive the simulation with a random agent
//!
//! Runs a number of episodes choosing uniformly among the four actions, logs
//! every score change, and can write each tick to a JSON-lines trace file.
//! Useful for smoke-testing the simulation and the observation encoders
//! without any learning involved.

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::game::{Action, SimConfig, Simulation, Snapshot};
use crate::metrics::{EpisodeStats, ScoreEvent, ScoreTracker};
use crate::observation::{Observation, ObservationEncoder, ObservationMode};

/// Offset mixed into the simulation seed for the agent's own generator
const AGENT_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for check mode
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Number of episodes to play
    pub num_episodes: usize,

    /// Ticks after which an episode is cut off even if the snake is alive
    pub max_steps: u64,

    /// Grid size, tile size and seed
    pub sim_config: SimConfig,

    /// Encoder applied to every snapshot
    pub observation: ObservationMode,

    /// Append the last actions to vector observations
    pub with_history: bool,

    /// Write every tick as a JSON line to this file
    pub trace_path: Option<PathBuf>,
}

impl CheckConfig {
    pub fn new(num_episodes: usize) -> Self {
        Self {
            num_episodes,
            max_steps: 10_000,
            sim_config: SimConfig::default(),
            observation: ObservationMode::default(),
            with_history: false,
            trace_path: None,
        }
    }
}

/// One line of the trace file
#[derive(Debug, Serialize)]
struct TraceRecord<'a> {
    episode: usize,
    tick: u64,
    action: Option<usize>,
    snapshot: &'a Snapshot,
    observation: &'a Observation,
}

pub struct CheckMode {
    sim: Simulation,
    encoder: ObservationEncoder,
    agent_rng: ChaCha8Rng,
    tracker: ScoreTracker,
    stats: EpisodeStats,
    trace: Option<BufWriter<File>>,
    config: CheckConfig,
}

impl CheckMode {
    pub fn new(config: CheckConfig) -> Result<Self> {
        config
            .sim_config
            .validate()
            .context("Invalid simulation config")?;

        let trace = match &config.trace_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory: {:?}", parent))?;
                }
                let file = File::create(path)
                    .with_context(|| format!("Failed to create trace file {:?}", path))?;
                Some(BufWriter::new(file))
            }
            None => None,
        };

        let sim = Simulation::new(config.sim_config.clone());
        let encoder =
            ObservationEncoder::new(config.observation, &config.sim_config, config.with_history);
        let agent_rng = ChaCha8Rng::seed_from_u64(config.sim_config.seed ^ AGENT_SEED_OFFSET);

        Ok(Self {
            sim,
            encoder,
            agent_rng,
            tracker: ScoreTracker::new(),
            stats: EpisodeStats::new(),
            trace,
            config,
        })
    }

    /// Play all episodes and return the aggregate statistics
    pub fn run(mut self) -> Result<EpisodeStats> {
        info!(
            episodes = self.config.num_episodes,
            width = self.config.sim_config.grid_width,
            height = self.config.sim_config.grid_height,
            seed = self.config.sim_config.seed,
            "starting check run"
        );

        for episode in 0..self.config.num_episodes {
            let (score, ticks) = self.run_episode(episode)?;
            self.stats.on_episode_end(score, ticks);
        }

        if let Some(trace) = self.trace.as_mut() {
            trace.flush().context("Failed to flush trace file")?;
        }

        info!(
            games = self.stats.games_played,
            high_score = self.stats.high_score,
            mean_score = self.stats.mean_score(),
            "check run complete"
        );

        Ok(self.stats)
    }

    /// Returns the final score and the number of ticks played
    fn run_episode(&mut self, episode: usize) -> Result<(u32, u64)> {
        info!(episode, "starting new game");

        let snapshot = self.sim.reset();
        self.encoder.reset();
        self.tracker.reset();
        let observation = self.encoder.encode(&snapshot);
        self.write_trace(episode, 0, None, &snapshot, &observation)?;

        let mut ticks = 0;
        while self.sim.is_alive() && ticks < self.config.max_steps {
            let action_idx = self.agent_rng.gen_range(0..Action::COUNT);
            self.encoder.record_action(action_idx);
            self.sim.advance(action_idx);
            ticks += 1;

            let snapshot = self.sim.snapshot();
            if let Some(ScoreEvent::FoodFound(score)) = self.tracker.observe(snapshot.score) {
                info!(episode, score, "found food");
            }

            let observation = self.encoder.encode(&snapshot);
            debug!(episode, tick = ticks, features = observation.len(), "observed");
            self.write_trace(episode, ticks, Some(action_idx), &snapshot, &observation)?;
        }

        let score = self.sim.score();
        info!(episode, score, ticks, alive = self.sim.is_alive(), "finished game");

        Ok((score, ticks))
    }

    fn write_trace(
        &mut self,
        episode: usize,
        tick: u64,
        action: Option<usize>,
        snapshot: &Snapshot,
        observation: &Observation,
    ) -> Result<()> {
        let Some(trace) = self.trace.as_mut() else {
            return Ok(());
        };

        let record = TraceRecord {
            episode,
            tick,
            action,
            snapshot,
            observation,
        };
        serde_json::to_writer(&mut *trace, &record).context("Failed to serialize trace record")?;
        writeln!(trace).context("Failed to write trace file")?;

        Ok(())
    }
}
