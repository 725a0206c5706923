use std::error::Error;

mod app;
mod config;
mod game;
mod hand;
mod io;
mod ui;

pub use config::{
    BASE_SNAKE_LENGTH, CELL_W, COUNTDOWN_SECS, GRID_COLS, GRID_ROWS, GROWTH_INTERVAL, MIN_GAP,
    MIN_PANE_WIDTH, PLAY_H, PLAY_W, SOCKET_PATH, SPEED_DECREMENT, SPEED_FLOOR,
};
pub use game::{Cell, Game};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
