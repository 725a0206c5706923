//! Interpretation of hand-pose landmarks into game input.
//!
//! The estimator itself lives in another process; this module only turns a
//! delivered landmark set into an up/down vector per finger and a grid cell
//! for the index fingertip. One frame in, one answer out; no temporal
//! smoothing.

use crate::game::Cell;
use crate::{GRID_COLS, GRID_ROWS};

pub const LANDMARK_COUNT: usize = 21;

// Fingertip landmark indices, thumb first (MediaPipe hand topology).
const FINGERTIPS: [usize; 5] = [4, 8, 12, 16, 20];
const INDEX_TIP: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Normalized landmark positions for one detected hand plus the pixel
/// dimensions of the frame they were estimated on.
#[derive(Clone, Debug)]
pub struct HandFrame {
    pub frame_w: f32,
    pub frame_h: f32,
    pub landmarks: [Point; LANDMARK_COUNT],
}

/// One flag per finger, thumb first. A finger counts as "up" when its tip
/// sits vertically above the joint two links proximal to it.
pub fn fingers_up(frame: &HandFrame) -> [bool; 5] {
    let mut states = [false; 5];
    for (i, &tip) in FINGERTIPS.iter().enumerate() {
        states[i] = frame.landmarks[tip].y < frame.landmarks[tip - 2].y;
    }
    states
}

/// Linear map from pixel coordinates onto the logical grid, clamped to the
/// grid bounds.
pub fn pixel_to_grid(px: f32, py: f32, frame_w: f32, frame_h: f32) -> Cell {
    let gx = ((px / frame_w * GRID_COLS as f32) as i32).clamp(0, GRID_COLS - 1);
    let gy = ((py / frame_h * GRID_ROWS as f32) as i32).clamp(0, GRID_ROWS - 1);
    Cell::new(gx, gy)
}

/// Grid cell under the index fingertip, or None when the index finger is
/// not extended (the previous target persists for that frame).
pub fn index_target(frame: &HandFrame) -> Option<Cell> {
    let [_, index_up, ..] = fingers_up(frame);
    if !index_up {
        return None;
    }
    let tip = frame.landmarks[INDEX_TIP];
    Some(pixel_to_grid(
        tip.x * frame.frame_w,
        tip.y * frame.frame_h,
        frame.frame_w,
        frame.frame_h,
    ))
}

#[cfg(test)]
fn make_frame() -> HandFrame {
    HandFrame {
        frame_w: 1600.0,
        frame_h: 900.0,
        landmarks: [Point { x: 0.5, y: 0.8 }; LANDMARK_COUNT],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finger_is_up_when_tip_above_proximal_joint() {
        let mut frame = make_frame();
        frame.landmarks[8] = Point { x: 0.5, y: 0.2 }; // index tip above pip
        frame.landmarks[16] = Point { x: 0.5, y: 0.3 }; // ring tip above pip
        assert_eq!(fingers_up(&frame), [false, true, false, true, false]);
    }

    #[test]
    fn all_fingers_down_on_a_flat_hand() {
        assert_eq!(fingers_up(&make_frame()), [false; 5]);
    }

    #[test]
    fn pixel_mapping_is_linear_and_clamped() {
        assert_eq!(pixel_to_grid(0.0, 0.0, 1600.0, 900.0), Cell::new(0, 0));
        assert_eq!(pixel_to_grid(800.0, 450.0, 1600.0, 900.0), Cell::new(20, 11));
        assert_eq!(
            pixel_to_grid(1599.0, 899.0, 1600.0, 900.0),
            Cell::new(GRID_COLS - 1, GRID_ROWS - 1)
        );
        // Out-of-frame coordinates clamp to the edge instead of wrapping.
        assert_eq!(pixel_to_grid(5000.0, -10.0, 1600.0, 900.0), Cell::new(GRID_COLS - 1, 0));
    }

    #[test]
    fn folded_index_suppresses_the_target() {
        let frame = make_frame();
        assert_eq!(index_target(&frame), None);

        let mut frame = make_frame();
        frame.landmarks[8] = Point { x: 0.51, y: 0.3 };
        assert_eq!(index_target(&frame), Some(Cell::new(20, 6)));
    }
}
