//! Interactive editor: tabbed form pane plus live preview.

mod app;
mod view;

pub use app::{Action, App, Screen};

use crate::context::ExecutionContext;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_types::Portfolio;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

/// Raw-mode/alternate-screen guard; restores the terminal when dropped.
struct TuiGuard;

impl TuiGuard {
    fn new() -> Result<Self> {
        // Enter alternate screen so we don't mess up the user's shell history
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub fn run(ctx: &ExecutionContext, record: Portfolio) -> Result<()> {
    let gate = ctx.gate();
    let mut app = App::new(record, gate.is_logged_in());

    let _guard = TuiGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    loop {
        terminal.draw(|frame| view::draw(frame, &app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let Some(action) = app.handle_key(key) else {
            continue;
        };

        match action {
            // The record is discarded on quit; exports are the only durable copy.
            Action::Quit => break,

            Action::AttemptLogin => {
                // A fresh attempt clears the prior message.
                app.login.error = None;
                match gate.attempt_login(&app.login.email, &app.login.password) {
                    Ok(()) => {
                        app.screen = Screen::Editor;
                        app.status = Some("Signed in".to_string());
                    }
                    Err(folio_runtime::Error::Gate(err)) => {
                        app.login.error = Some(err.to_string());
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            Action::Export => match folio_runtime::export_portfolio(&app.record, &ctx.export_dir())
            {
                Ok(path) => {
                    app.status = Some(format!("Exported portfolio to {}", path.display()));
                }
                Err(err) => app.status = Some(err.to_string()),
            },

            Action::Import(path) => match folio_runtime::import_portfolio(&path) {
                Ok(record) => {
                    app.record = record;
                    app.clamp_cursor();
                    app.status = Some(format!("Imported {}", path.display()));
                }
                // The in-memory record stays untouched on failure.
                Err(err) => app.status = Some(err.to_string()),
            },
        }
    }

    Ok(())
}
