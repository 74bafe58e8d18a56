//! Observation encoders for learning agents
//!
//! Provides:
//! - Vector observations (head, food, length, optional action history)
//! - Single-channel grid images (head, body and food marked)
//!
//! Both are pure projections of a `Snapshot`.

pub mod image;
pub mod vector;

pub use image::ImageEncoder;
pub use vector::VectorEncoder;

use serde::{Deserialize, Serialize};

use crate::game::{SimConfig, Snapshot};

/// Which encoder to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationMode {
    #[default]
    Vector,
    Image,
}

/// An encoded observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Observation {
    Vector(Vec<f32>),
    Image(Vec<u8>),
}

impl Observation {
    pub fn len(&self) -> usize {
        match self {
            Observation::Vector(features) => features.len(),
            Observation::Image(pixels) => pixels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Either encoder behind one interface
#[derive(Debug, Clone)]
pub enum ObservationEncoder {
    Vector(VectorEncoder),
    Image(ImageEncoder),
}

impl ObservationEncoder {
    /// `with_history` only affects the vector encoder
    pub fn new(mode: ObservationMode, config: &SimConfig, with_history: bool) -> Self {
        match mode {
            ObservationMode::Vector => {
                ObservationEncoder::Vector(VectorEncoder::new(config, with_history))
            }
            ObservationMode::Image => ObservationEncoder::Image(ImageEncoder::new(config)),
        }
    }

    pub fn reset(&mut self) {
        if let ObservationEncoder::Vector(encoder) = self {
            encoder.reset();
        }
    }

    pub fn record_action(&mut self, action_idx: usize) {
        if let ObservationEncoder::Vector(encoder) = self {
            encoder.record_action(action_idx);
        }
    }

    pub fn encode(&self, snapshot: &Snapshot) -> Observation {
        match self {
            ObservationEncoder::Vector(encoder) => Observation::Vector(encoder.encode(snapshot)),
            ObservationEncoder::Image(encoder) => Observation::Image(encoder.encode(snapshot)),
        }
    }
}
