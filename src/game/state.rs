use std::time::{Duration, Instant};

use crate::game::level::{self, LevelSettings};
use crate::game::{grid, Cell, Snake};
use crate::hand::{self, HandFrame};
use crate::{COUNTDOWN_SECS, GROWTH_INTERVAL, SPEED_DECREMENT, SPEED_FLOOR};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    NotStarted,
    Countdown,
    Playing,
    GameOver,
}

/// Discrete player commands. Quit is handled by the app loop directly and
/// never reaches the state machine.
#[derive(Clone, Copy, Debug)]
pub enum GameCommand {
    Start,
    Restart,
}

/// One-shot report emitted on entry to GameOver, consumed by the
/// presentation layer (roast gag). Taken at most once per episode.
#[derive(Clone, Copy, Debug)]
pub struct EndReport {
    pub score: u64,
    pub level: u8,
}

pub struct Game {
    pub snake: Snake,
    pub target: Cell,
    pub obstacles: Vec<Cell>,
    pub score: u64,
    pub level: u8,
    pub settings: LevelSettings,
    pub phase: Phase,
    speed: Duration,
    // Accumulated capture decrements; survives level changes so the two
    // speed sources stack.
    speed_penalty: Duration,
    countdown_start: Instant,
    last_move: Instant,
    last_growth: Instant,
    end_report: Option<EndReport>,
}

impl Game {
    pub fn new() -> Self {
        let settings = level::settings_for_level(1);
        let now = Instant::now();
        Self {
            snake: Snake::new(Cell::new(5, 5)),
            target: Cell::new(15, 10),
            obstacles: Vec::new(),
            score: 0,
            level: 1,
            speed: settings.speed,
            speed_penalty: Duration::ZERO,
            settings,
            phase: Phase::NotStarted,
            countdown_start: now,
            last_move: now,
            last_growth: now,
            end_report: None,
        }
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn handle_command(&mut self, cmd: GameCommand, now: Instant) {
        match (self.phase, cmd) {
            (Phase::NotStarted, GameCommand::Start) => self.begin_countdown(now),
            (Phase::Playing | Phase::GameOver, GameCommand::Restart) => {
                *self = Game::new();
                self.begin_countdown(now);
            }
            _ => {}
        }
    }

    fn begin_countdown(&mut self, now: Instant) {
        self.phase = Phase::Countdown;
        self.countdown_start = now;
    }

    /// Whole seconds left on the countdown banner (3, 2, 1).
    pub fn countdown_remaining(&self, now: Instant) -> u64 {
        COUNTDOWN_SECS.saturating_sub(now.duration_since(self.countdown_start).as_secs())
    }

    /// Advance timers and, while Playing, the simulation. Called once per
    /// frame of the cooperative loop.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Countdown => {
                if now.duration_since(self.countdown_start).as_secs() >= COUNTDOWN_SECS {
                    self.phase = Phase::Playing;
                    self.last_move = now;
                    self.last_growth = now;
                }
            }
            Phase::Playing => self.advance(now),
            Phase::NotStarted | Phase::GameOver => {}
        }
    }

    fn advance(&mut self, now: Instant) {
        if now.duration_since(self.last_move) >= self.speed {
            let moved = self.snake.step(self.target, &self.obstacles);
            self.last_move = now;
            if !moved {
                self.enter_game_over();
                return;
            }
        }

        // Capture: the finger may have moved onto the head this frame.
        if self.snake.head() == self.target {
            self.snake.enqueue_growth();
            self.score += 1;
            self.level = self.level.max(level::level_for_score(self.score));
            self.speed_penalty += SPEED_DECREMENT;
            self.apply_level_settings();
            self.relocate_target();
        }

        // Free growth ticks independently of captures; both may fire in the
        // same frame and their score increments are cumulative.
        if now.duration_since(self.last_growth) >= GROWTH_INTERVAL {
            self.snake.enqueue_growth();
            self.score += 1;
            self.last_growth = now;
            let derived = level::level_for_score(self.score);
            if derived > self.level {
                self.level = derived;
                self.apply_level_settings();
            }
        }
    }

    /// Feed one interpreted camera frame. An extended index finger drags
    /// the target; pointing at an obstacle ends the game instead.
    pub fn apply_hand(&mut self, frame: &HandFrame) {
        if self.phase != Phase::Playing {
            return;
        }
        if let Some(cell) = hand::index_target(frame) {
            if self.obstacles.contains(&cell) {
                self.enter_game_over();
            } else {
                self.target = cell;
            }
        }
    }

    pub fn take_end_report(&mut self) -> Option<EndReport> {
        self.end_report.take()
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.end_report = Some(EndReport {
            score: self.score,
            level: self.level,
        });
    }

    /// Re-derive everything the level controls: the obstacle field is
    /// regenerated wholesale and the step interval resets to the level base
    /// minus the accumulated capture penalty.
    fn apply_level_settings(&mut self) {
        self.settings = level::settings_for_level(self.level);
        self.obstacles = level::generate_obstacles(self.settings.obstacle_count);
        self.speed = self
            .settings
            .speed
            .saturating_sub(self.speed_penalty)
            .max(SPEED_FLOOR);
    }

    fn relocate_target(&mut self) {
        loop {
            let candidate = grid::random_cell();
            if !self.snake.contains(candidate) {
                self.target = candidate;
                break;
            }
        }
    }
}
