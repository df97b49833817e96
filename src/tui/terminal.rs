//! Raw mode and alternate screen setup, undone on drop.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const WINDOW_TITLE: &str = "Vibe-Check-Conditional (VCC)";

/// Restores the terminal when dropped, including while unwinding from a panic.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> Result<(Self, Tui)> {
        enable_raw_mode().context("Cannot enable raw mode")?;
        // From here on the guard undoes whatever succeeded
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, SetTitle(WINDOW_TITLE))
            .context("Cannot enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Cannot create terminal")?;
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Must not panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}
