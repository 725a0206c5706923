use std::time::Duration;

use crate::game::{grid, Cell};

/// Difficulty knobs derived from the current level. The moving/blink/size
/// fields are presentation hints; the simulation itself never animates
/// obstacles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LevelSettings {
    pub speed: Duration,
    pub obstacle_count: usize,
    pub moving_obstacles: bool,
    pub target_blink: bool,
    pub target_size_delta: u16,
}

pub fn settings_for_level(level: u8) -> LevelSettings {
    match level {
        1 => LevelSettings {
            speed: Duration::from_millis(300),
            obstacle_count: 0,
            moving_obstacles: false,
            target_blink: false,
            target_size_delta: 0,
        },
        2 => LevelSettings {
            speed: Duration::from_millis(250),
            obstacle_count: 3,
            moving_obstacles: false,
            target_blink: false,
            target_size_delta: 4,
        },
        3 => LevelSettings {
            speed: Duration::from_millis(200),
            obstacle_count: 5,
            moving_obstacles: true,
            target_blink: false,
            target_size_delta: 8,
        },
        4 => LevelSettings {
            speed: Duration::from_millis(150),
            obstacle_count: 8,
            moving_obstacles: false,
            target_blink: true,
            target_size_delta: 12,
        },
        _ => LevelSettings {
            speed: Duration::from_millis(120),
            obstacle_count: 10,
            moving_obstacles: true,
            target_blink: true,
            target_size_delta: 16,
        },
    }
}

pub fn level_for_score(score: u64) -> u8 {
    if score >= 25 {
        5
    } else if score >= 20 {
        4
    } else if score >= 15 {
        3
    } else if score >= 10 {
        2
    } else {
        1
    }
}

/// Fresh uniform obstacle field. Cells may land on or next to the snake or
/// target; that overlap is part of the game's rules, not an oversight.
pub fn generate_obstacles(count: usize) -> Vec<Cell> {
    (0..count).map(|_| grid::random_cell()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_table_is_exact() {
        let expected = [
            (1u8, 300u64, 0usize, false, false, 0u16),
            (2, 250, 3, false, false, 4),
            (3, 200, 5, true, false, 8),
            (4, 150, 8, false, true, 12),
            (5, 120, 10, true, true, 16),
        ];
        for (level, ms, count, moving, blink, delta) in expected {
            let s = settings_for_level(level);
            assert_eq!(s.speed, Duration::from_millis(ms), "level {level}");
            assert_eq!(s.obstacle_count, count, "level {level}");
            assert_eq!(s.moving_obstacles, moving, "level {level}");
            assert_eq!(s.target_blink, blink, "level {level}");
            assert_eq!(s.target_size_delta, delta, "level {level}");
        }
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(9), 1);
        assert_eq!(level_for_score(10), 2);
        assert_eq!(level_for_score(14), 2);
        assert_eq!(level_for_score(15), 3);
        assert_eq!(level_for_score(20), 4);
        assert_eq!(level_for_score(25), 5);
        assert_eq!(level_for_score(100), 5);
    }

    #[test]
    fn obstacle_field_matches_requested_count() {
        assert!(generate_obstacles(0).is_empty());
        assert_eq!(generate_obstacles(8).len(), 8);
    }
}
