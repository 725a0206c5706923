// Shared game/UI constants.
use std::time::Duration;

// Logical grid the game is simulated on, independent of any pixel size.
pub const GRID_COLS: i32 = 40;
pub const GRID_ROWS: i32 = 22;

pub const CELL_W: usize = 2; // render each grid cell as two characters wide
pub const PLAY_W: usize = GRID_COLS as usize * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = GRID_ROWS as usize + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the playfield plus the sidebar and cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 26;

// Where the out-of-process hand-pose estimator delivers landmark lines.
pub const SOCKET_PATH: &str = "/tmp/finger-chase-hand.sock";

// The snake has "caught" the target once it gets this close (grid units).
pub const MIN_GAP: f64 = 3.0;
pub const BASE_SNAKE_LENGTH: usize = 3;

pub const COUNTDOWN_SECS: u64 = 3;
pub const GROWTH_INTERVAL: Duration = Duration::from_secs(2);
pub const SPEED_DECREMENT: Duration = Duration::from_millis(5);
pub const SPEED_FLOOR: Duration = Duration::from_millis(70);
