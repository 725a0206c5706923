pub mod grid;
pub mod level;
pub mod snake;
pub mod state;

pub use grid::Cell;
pub use level::{level_for_score, settings_for_level, LevelSettings};
pub use snake::Snake;
pub use state::{EndReport, Game, GameCommand, Phase};
