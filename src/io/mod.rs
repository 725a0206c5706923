use std::fs;
use std::io::{BufRead, BufReader};
use std::os::unix::net::{UnixListener, UnixStream};
use std::sync::mpsc;
use std::thread;

use crate::hand::{HandFrame, Point, LANDMARK_COUNT};
use crate::SOCKET_PATH;

/// Events delivered by the hand-pose estimator process. One line per
/// processed camera frame:
///
/// ```text
/// HAND <frame_w> <frame_h> <x0> <y0> ... <x20> <y20>
/// NONE
/// ERR
/// ```
///
/// `NONE` (no hand detected) produces no event; the previous target simply
/// persists. `ERR` means the estimator lost its frame source.
#[derive(Debug)]
pub enum HandEvent {
    Frame(HandFrame),
    SourceFailed,
}

/// Bind the estimator socket and feed parsed events into `tx`. A bind
/// failure is fatal: the game cannot run without a frame source.
pub fn spawn_hand_listener(tx: mpsc::Sender<HandEvent>) -> std::io::Result<()> {
    let _ = fs::remove_file(SOCKET_PATH);
    let listener = UnixListener::bind(SOCKET_PATH)?;
    thread::spawn(move || {
        for stream in listener.incoming() {
            if let Ok(stream) = stream {
                handle_stream(stream, &tx);
            }
        }
    });
    Ok(())
}

fn handle_stream(stream: UnixStream, tx: &mpsc::Sender<HandEvent>) {
    let reader = BufReader::new(stream);
    for line in reader.lines() {
        if let Ok(line) = line {
            if let Some(ev) = parse_hand_line(&line) {
                let _ = tx.send(ev);
            }
        }
    }
}

fn parse_hand_line(line: &str) -> Option<HandEvent> {
    let line = line.trim();
    if line == "ERR" {
        return Some(HandEvent::SourceFailed);
    }
    let rest = line.strip_prefix("HAND ")?;
    let mut parts = rest.split_whitespace();
    let frame_w: f32 = parts.next()?.parse().ok()?;
    let frame_h: f32 = parts.next()?.parse().ok()?;
    let mut landmarks = [Point { x: 0.0, y: 0.0 }; LANDMARK_COUNT];
    for lm in landmarks.iter_mut() {
        lm.x = parts.next()?.parse().ok()?;
        lm.y = parts.next()?.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(HandEvent::Frame(HandFrame {
        frame_w,
        frame_h,
        landmarks,
    }))
}
