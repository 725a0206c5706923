use rand::Rng;

use crate::{GRID_COLS, GRID_ROWS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A uniformly random cell anywhere on the grid.
pub fn random_cell() -> Cell {
    let mut rng = rand::thread_rng();
    Cell::new(rng.gen_range(0..GRID_COLS), rng.gen_range(0..GRID_ROWS))
}
