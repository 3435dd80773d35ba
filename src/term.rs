//! Terminal capabilities — dimension queries and the pause-per-screen pager.
//!
//! Kept apart from the core so layout decisions can be tested headlessly
//! with injected dimensions.

use std::io::{self, Write};

use colored::Colorize;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy)]
pub struct TermInfo {
    pub cols: u16,
    pub rows: u16,
}

impl TermInfo {
    /// Query the terminal, falling back to 80×24 when detection fails
    /// (e.g. stdout is not a tty).
    pub fn detect() -> Self {
        match terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Self { cols, rows },
            _ => Self { cols: 80, rows: 24 },
        }
    }
}

/// Block until a single key press, restoring the terminal mode on return.
pub fn read_keystroke() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = wait_for_key();
    terminal::disable_raw_mode()?;
    result
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Counts lines written to the screen and pauses for a keystroke once a
/// screenful has gone by.  A no-op unless `--pause` was given.
pub struct Pager {
    enabled: bool,
    page_lines: u16,
    emitted: u16,
}

impl Pager {
    pub fn new(enabled: bool, rows: u16) -> Self {
        Self {
            enabled,
            // Leave room for the prompt line itself.
            page_lines: rows.saturating_sub(2).max(1),
            emitted: 0,
        }
    }

    /// Record `lines` freshly printed lines, pausing if the screen is full.
    pub fn advance(&mut self, lines: u16) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.emitted = self.emitted.saturating_add(lines);
        if self.emitted >= self.page_lines {
            let prompt = "-- More --".bold();
            print!("{prompt}");
            io::stdout().flush()?;
            read_keystroke()?;
            print!("\r          \r");
            io::stdout().flush()?;
            self.emitted = 0;
        }
        Ok(())
    }
}
