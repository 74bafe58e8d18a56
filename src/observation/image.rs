use crate::game::{Coordinate, SimConfig, Snapshot};

/// Pixel value marking an occupied cell
pub const OCCUPIED: u8 = 255;

/// Encodes a snapshot as a single-channel grid image
///
/// Cells are stored column-major, `[x_tile * grid_height + y_tile]`, so the
/// image has shape `(grid_width, grid_height, 1)`. Head, body and food all use
/// the same value.
#[derive(Debug, Clone)]
pub struct ImageEncoder {
    grid_width: usize,
    grid_height: usize,
    tile_size: i32,
}

impl ImageEncoder {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            tile_size: config.tile_size,
        }
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.grid_width, self.grid_height, 1)
    }

    pub fn len(&self) -> usize {
        self.grid_width * self.grid_height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn encode(&self, snapshot: &Snapshot) -> Vec<u8> {
        let mut data = vec![0; self.len()];

        let cells = std::iter::once(&snapshot.head)
            .chain(snapshot.body.iter())
            .chain(std::iter::once(&snapshot.food_position));

        for &pos in cells {
            if let Some(idx) = self.cell_index(pos) {
                data[idx] = OCCUPIED;
            }
        }

        data
    }

    /// Index of the cell holding `pos`, `None` if it is off the grid
    fn cell_index(&self, pos: Coordinate) -> Option<usize> {
        let (x, y) = pos.to_tile(self.tile_size);
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        (x < self.grid_width && y < self.grid_height).then(|| x * self.grid_height + y)
    }
}
