//! Snake Sim - a deterministic snake simulation for reinforcement learning
//!
//! This library provides:
//! - Core simulation logic (game module)
//! - Observation encoders for learning agents (observation module)
//! - Episode statistics (metrics module)
//! - A random-agent check mode (modes module)

pub mod game;
pub mod metrics;
pub mod modes;
pub mod observation;
