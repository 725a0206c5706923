use std::collections::VecDeque;

use crate::game::Cell;
use crate::{BASE_SNAKE_LENGTH, MIN_GAP};

pub struct Snake {
    body: VecDeque<Cell>,
    desired_length: usize,
    pub growth_pending: u32,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Self {
            body,
            desired_length: BASE_SNAKE_LENGTH,
            growth_pending: 0,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.iter().any(|&c| c == cell)
    }

    pub fn enqueue_growth(&mut self) {
        self.growth_pending += 1;
    }

    /// Advance one tick toward `target`: the head moves at most one grid
    /// unit per axis (diagonals allowed). Returns false without mutating
    /// anything when the target is within MIN_GAP (the snake has caught it)
    /// or when the move would land on the body or an obstacle.
    pub fn step(&mut self, target: Cell, obstacles: &[Cell]) -> bool {
        let head = self.head();
        let dx = target.x - head.x;
        let dy = target.y - head.y;

        let dist = ((dx * dx + dy * dy) as f64).sqrt();
        if dist <= MIN_GAP {
            return false;
        }

        let next = Cell::new(head.x + dx.signum(), head.y + dy.signum());
        if self.contains(next) || obstacles.contains(&next) {
            return false;
        }

        self.body.push_front(next);
        if self.growth_pending > 0 {
            self.growth_pending -= 1;
        } else if self.body.len() > self.desired_length {
            self.body.pop_back();
        }
        true
    }
}

#[cfg(test)]
fn from_cells(cells: &[(i32, i32)]) -> Snake {
    Snake {
        body: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
        desired_length: BASE_SNAKE_LENGTH,
        growth_pending: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_is_diagonal_toward_target() {
        let mut snake = Snake::new(Cell::new(5, 5));
        assert!(snake.step(Cell::new(15, 10), &[]));
        assert_eq!(snake.head(), Cell::new(6, 6));
        // No growth event yet, but the body still fills toward base length.
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn axes_move_independently() {
        let mut snake = Snake::new(Cell::new(5, 5));
        assert!(snake.step(Cell::new(5, 15), &[]));
        assert_eq!(snake.head(), Cell::new(5, 6));

        let mut snake = Snake::new(Cell::new(5, 5));
        assert!(snake.step(Cell::new(15, 5), &[]));
        assert_eq!(snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn close_target_blocks_the_step() {
        // Euclidean distance exactly MIN_GAP and below is a failing no-op.
        for target in [
            Cell::new(8, 5),
            Cell::new(5, 8),
            Cell::new(2, 5),
            Cell::new(7, 7),
            Cell::new(5, 5),
        ] {
            let mut snake = Snake::new(Cell::new(5, 5));
            assert!(!snake.step(target, &[]));
            assert_eq!(snake.head(), Cell::new(5, 5));
            assert_eq!(snake.len(), 1);
        }
        // Just outside the gap the snake moves again.
        let mut snake = Snake::new(Cell::new(5, 5));
        assert!(snake.step(Cell::new(9, 5), &[]));
    }

    #[test]
    fn obstacle_in_the_way_fails_without_mutation() {
        let mut snake = Snake::new(Cell::new(5, 5));
        assert!(!snake.step(Cell::new(15, 10), &[Cell::new(6, 6)]));
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn own_body_in_the_way_fails_without_mutation() {
        let mut snake = from_cells(&[(5, 5), (6, 6), (7, 7)]);
        assert!(!snake.step(Cell::new(15, 10), &[]));
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn growth_queue_extends_by_one_per_step() {
        let mut snake = from_cells(&[(5, 5), (4, 5), (3, 5)]);
        snake.enqueue_growth();
        snake.enqueue_growth();

        assert!(snake.step(Cell::new(15, 10), &[]));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.growth_pending, 1);

        assert!(snake.step(Cell::new(15, 10), &[]));
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.growth_pending, 0);

        // Queue drained and above desired length: the tail is trimmed.
        assert!(snake.step(Cell::new(15, 10), &[]));
        assert_eq!(snake.len(), 5);
    }
}
