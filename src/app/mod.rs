use std::error::Error;
use std::io::{stdout, Stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{Game, GameCommand};
use crate::io::{spawn_hand_listener, HandEvent};
use crate::ui::{draw_game, roast};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new();
    let (tx, rx) = mpsc::channel();
    spawn_hand_listener(tx)?;

    let mut roast_line: Option<String> = None;
    let mut episode = 0usize;

    loop {
        // Hand input first, then the simulation, then presentation.
        for ev in rx.try_iter() {
            match ev {
                HandEvent::Frame(frame) => game.apply_hand(&frame),
                HandEvent::SourceFailed => {
                    return Err("hand estimator lost its frame source".into());
                }
            }
        }

        game.tick(Instant::now());

        if let Some(report) = game.take_end_report() {
            roast_line = Some(roast::pick(episode, report.score));
            episode += 1;
        }

        terminal.draw(|frame| draw_game(frame, &game, roast_line.as_deref()))?;

        if event::poll(Duration::from_millis(30))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('s') => game.handle_command(GameCommand::Start, Instant::now()),
                    KeyCode::Char('r') => {
                        roast_line = None;
                        game.handle_command(GameCommand::Restart, Instant::now());
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
