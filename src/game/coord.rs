use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A tile-aligned position on the grid, in coordinate units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Advance one tile in a direction
    pub fn offset(&self, direction: Direction, tile_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * tile_size, dy * tile_size)
    }

    /// Tile indices of this coordinate
    pub fn to_tile(&self, tile_size: i32) -> (i32, i32) {
        (self.x / tile_size, self.y / tile_size)
    }
}

/// Playable extent of the grid in coordinate units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if a position lies within `[0, width-1] x [0, height-1]`
    pub fn contains(&self, pos: Coordinate) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Middle tile of the grid, rounded down on odd tile counts
    pub fn center(&self, tile_size: i32) -> Coordinate {
        Coordinate::new(
            self.width / tile_size / 2 * tile_size,
            self.height / tile_size / 2 * tile_size,
        )
    }
}
