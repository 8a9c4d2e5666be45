//! Terminal wiring: tty guard, key polling, and the draw loop. This is
//! the only module that talks to the terminal; everything it renders
//! comes from the view projection.

pub mod render;
pub mod term;

use crate::app::{view, App};
use crate::errors::{AppError, AppResult};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::tty::IsTty;
use std::io;
use std::time::Duration;
use term::TerminalGuard;

pub fn run(tick_rate: Duration) -> AppResult<()> {
    if !io::stdin().is_tty() {
        return Err(AppError::NotATerminal);
    }
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new();
    run_loop(&mut guard, &mut app, tick_rate)
}

fn run_loop(guard: &mut TerminalGuard, app: &mut App, tick_rate: Duration) -> AppResult<()> {
    loop {
        let vm = view::project(app);
        guard.terminal.draw(|frame| render::draw(frame, &vm))?;
        // One event, fully processed, then one draw; the one-shot error
        // line is consumed only after it has been on screen once.
        app.notify_rendered();

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        if app.should_quit() {
            return Ok(());
        }
    }
}
