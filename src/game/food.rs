use rand::Rng;
use tracing::trace;

use super::coord::{Bounds, Coordinate};

/// The single collectible on the grid
///
/// Placement never looks at the snake, so food may land on a body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    pub position: Coordinate,
    bounds: Bounds,
    tile_size: i32,
}

impl Food {
    /// Create food at a random tile
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, tile_size: i32, rng: &mut R) -> Self {
        let mut food = Self {
            position: Coordinate::new(0, 0),
            bounds,
            tile_size,
        };
        food.respawn(rng);
        food
    }

    /// Move the food to a uniformly random tile
    ///
    /// Tile indices are drawn from `0..(bounds / tile_size - 1)`, so the last
    /// row and column are never chosen.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Coordinate {
        let x = rng.gen_range(0..Self::tile_span(self.bounds.width, self.tile_size));
        let y = rng.gen_range(0..Self::tile_span(self.bounds.height, self.tile_size));
        self.position = Coordinate::new(x * self.tile_size, y * self.tile_size);
        trace!(x = self.position.x, y = self.position.y, "food respawned");
        self.position
    }

    /// Put the food exactly at `position`
    pub fn place(&mut self, position: Coordinate) -> Coordinate {
        self.position = position;
        self.position
    }

    fn tile_span(extent: i32, tile_size: i32) -> i32 {
        // an empty range would panic in gen_range
        (extent / tile_size - 1).max(1)
    }
}
