//! Core simulation logic for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Randomness comes from a generator owned by each `Simulation`, so a fixed seed
//! reproduces an episode exactly.

pub mod action;
pub mod config;
pub mod coord;
pub mod food;
pub mod simulation;
pub mod snake;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, SimConfig};
pub use coord::{Bounds, Coordinate};
pub use food::Food;
pub use simulation::{Simulation, Snapshot};
pub use snake::{CollisionType, Snake};
