//! Trigger service: one request starts a game session. The child process is
//! spawned fire-and-forget; the acknowledgement never waits on it and its
//! lifecycle is not tracked.

use std::env;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::{Command, ExitCode, Stdio};

const BIND_ADDR: &str = "127.0.0.1:4517";

fn main() -> ExitCode {
    let game_cmd = match game_binary_path() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("cannot find finger-chase binary: {e}");
            return ExitCode::from(1);
        }
    };

    let listener = match TcpListener::bind(BIND_ADDR) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("trigger failed to bind {BIND_ADDR}: {e}");
            return ExitCode::from(1);
        }
    };
    eprintln!("trigger listening on {BIND_ADDR}");

    for stream in listener.incoming() {
        if let Ok(stream) = stream {
            if let Err(err) = handle_request(stream, &game_cmd) {
                eprintln!("trigger error: {err}");
            }
        }
    }
    ExitCode::SUCCESS
}

fn handle_request(mut stream: TcpStream, game_cmd: &str) -> Result<(), String> {
    let mut reader = BufReader::new(stream.try_clone().map_err(|e| e.to_string())?);
    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .map_err(|e| e.to_string())?;

    let (status, body) = if request_line.starts_with("POST /start") {
        match Command::new(game_cmd).stdin(Stdio::null()).spawn() {
            Ok(_) => ("200 OK", r#"{"status":"game started"}"#),
            Err(_) => ("500 Internal Server Error", r#"{"status":"launch failed"}"#),
        }
    } else {
        ("404 Not Found", r#"{"status":"unknown endpoint"}"#)
    };

    write!(
        stream,
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .map_err(|e| e.to_string())
}

fn game_binary_path() -> Result<String, String> {
    let exe = env::current_exe().map_err(|e| e.to_string())?;
    let mut path = exe
        .parent()
        .map(PathBuf::from)
        .ok_or_else(|| "unable to resolve current exe dir".to_string())?;
    path.push("finger-chase");
    if path.exists() {
        return path
            .to_str()
            .map(|s| s.to_string())
            .ok_or_else(|| "non-utf8 path to finger-chase".to_string());
    }
    // Fallback to relying on PATH.
    Ok("finger-chase".to_string())
}
