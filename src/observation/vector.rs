use std::collections::VecDeque;

use crate::game::{SimConfig, Snapshot};

/// Number of past actions kept when history is enabled
pub const HISTORY_LEN: usize = 10;

/// Number of features describing the current state
const STATE_FEATURES: usize = 5;

/// Encodes a snapshot as a flat feature vector
///
/// Layout: `[head_x, head_y, food_x, food_y, length * 2 / grid_width]` in tile
/// units, followed by the last `HISTORY_LEN` action indices when history is
/// enabled (oldest first).
#[derive(Debug, Clone)]
pub struct VectorEncoder {
    tile_size: f32,
    grid_width: f32,
    history: Option<VecDeque<usize>>,
}

impl VectorEncoder {
    pub fn new(config: &SimConfig, with_history: bool) -> Self {
        Self {
            tile_size: config.tile_size as f32,
            grid_width: config.grid_width as f32,
            history: with_history.then(|| VecDeque::from(vec![0; HISTORY_LEN])),
        }
    }

    /// Number of features in the encoded vector
    pub fn feature_len(&self) -> usize {
        match self.history {
            Some(_) => STATE_FEATURES + HISTORY_LEN,
            None => STATE_FEATURES,
        }
    }

    /// Zero the action history at the start of an episode
    pub fn reset(&mut self) {
        if let Some(history) = self.history.as_mut() {
            history.clear();
            history.extend(std::iter::repeat(0).take(HISTORY_LEN));
        }
    }

    /// Remember the raw action index about to be applied
    ///
    /// Indices outside the four moves are kept as given, even though the
    /// simulation treats them as no-ops.
    pub fn record_action(&mut self, action_idx: usize) {
        if let Some(history) = self.history.as_mut() {
            if history.len() == HISTORY_LEN {
                history.pop_front();
            }
            history.push_back(action_idx);
        }
    }

    pub fn encode(&self, snapshot: &Snapshot) -> Vec<f32> {
        let mut features = Vec::with_capacity(self.feature_len());
        features.push(snapshot.head.x as f32 / self.tile_size);
        features.push(snapshot.head.y as f32 / self.tile_size);
        features.push(snapshot.food_position.x as f32 / self.tile_size);
        features.push(snapshot.food_position.y as f32 / self.tile_size);
        features.push(snapshot.length as f32 * 2.0 / self.grid_width);

        if let Some(history) = &self.history {
            features.extend(history.iter().map(|&idx| idx as f32));
        }

        features
    }
}
