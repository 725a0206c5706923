use std::time::{Instant, SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::game::{Game, Phase};
use crate::{CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

pub mod roast;

pub fn draw_game(frame: &mut Frame, game: &Game, roast_line: Option<&str>) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("FINGER CHASE"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("FINGER CHASE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into play area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((PLAY_W as u16 + 2).max(30)),
            Constraint::Length(24),
        ])
        .split(cabinet_inner);

    // Center the fixed-size playfield within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_playfield(frame, game, play_rect);
    draw_sidebar(frame, game, cols[1]);
    draw_overlay(frame, game, roast_line, play_rect);
}

fn blink_on() -> bool {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    (millis / 300) % 2 == 0
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    // Plot one grid cell as two characters inside the border.
    let plot = |grid: &mut [Vec<char>], cell: crate::Cell, left: char, right: char| {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        let gx = 1 + cell.x as usize * CELL_W;
        let gy = 1 + cell.y as usize;
        if gy < PLAY_H - 1 && gx + 1 < PLAY_W - 1 {
            grid[gy][gx] = left;
            grid[gy][gx + 1] = right;
        }
    };

    let blink = blink_on();

    // Obstacles shimmer when the level's moving flag is set; motion is a
    // presentation effect only, the cells themselves never change.
    for &obs in &game.obstacles {
        let ch = if game.settings.moving_obstacles && !blink {
            '░'
        } else {
            '▒'
        };
        plot(&mut grid, obs, ch, ch);
    }

    // Target: glyph pair widens with the level's size delta; at blink
    // levels it is hidden every other beat.
    if !game.settings.target_blink || blink {
        let (left, right) = match game.settings.target_size_delta {
            0 | 4 => ('(', ')'),
            8 => ('[', ']'),
            _ => ('{', '}'),
        };
        plot(&mut grid, game.target, left, right);
    }

    for (i, &cell) in game.snake.cells().enumerate() {
        if i == 0 {
            plot(&mut grid, cell, '█', '█');
        } else {
            plot(&mut grid, cell, '▓', '▓');
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(0), Constraint::Length(8)].as_ref())
        .split(area);

    let status = match game.phase {
        Phase::NotStarted => "IDLE",
        Phase::Countdown => "READY",
        Phase::Playing => {
            if blink_on() {
                "ACTIVE"
            } else {
                "      "
            }
        }
        Phase::GameOver => "OVER",
    };

    let info = Paragraph::new(format!(
        "SCORE\n{}\n\nLEVEL\n{}\n\nLENGTH\n{}\n\nSTATUS\n{}",
        game.score,
        game.level,
        game.snake.len(),
        status
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new(
        "index finger: flee\ns start\nr restart\nq/esc quit",
    )
    .block(Block::default().title("CONTROLS").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

fn draw_overlay(frame: &mut Frame, game: &Game, roast_line: Option<&str>, play_rect: Rect) {
    let text = match game.phase {
        Phase::NotStarted => "PRESS S TO START\n\nq quits".to_string(),
        Phase::Countdown => {
            let remaining = game.countdown_remaining(Instant::now());
            if remaining == 0 {
                return;
            }
            format!("{remaining}")
        }
        Phase::GameOver => format!(
            "GAME OVER\n\nFINAL SCORE: {}  LEVEL: {}\n\n{}\n\nPress r to restart",
            game.score,
            game.level,
            roast_line.unwrap_or("")
        ),
        Phase::Playing => return,
    };

    let overlay_w = (PLAY_W as u16).saturating_sub(8).max(12);
    let overlay_h = if game.phase == Phase::GameOver { 11 } else { 7 };
    let popup = Rect {
        x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
        y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
        width: overlay_w,
        height: overlay_h,
    };
    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(overlay, popup);
}
