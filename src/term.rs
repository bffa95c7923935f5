//! Crossterm-backed display surface
//!
//! Owns the terminal for the lifetime of a session: raw mode plus the
//! alternate screen are entered on acquisition and unconditionally left
//! again on every exit path (including panics, via `Drop`).

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, SetBackgroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::consts::{MIN_COLS, MIN_ROWS};
use crate::render::{Cell, Surface};

impl Cell {
    fn color(self) -> Color {
        match self {
            Cell::Border => Color::Green,
            Cell::Paddle => Color::White,
            Cell::Ball => Color::Red,
        }
    }
}

/// The real terminal as a [`Surface`]
pub struct TermSurface {
    out: Stdout,
    cols: u16,
    rows: u16,
    restored: bool,
}

impl TermSurface {
    /// Acquire the terminal. Fails with a diagnostic, before any terminal
    /// state is changed, when the window is too small to hold the field.
    pub fn acquire() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(io::Error::other(format!(
                "terminal is {cols}x{rows}, need at least {MIN_COLS}x{MIN_ROWS}"
            )));
        }

        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(Self {
            out,
            cols,
            rows,
            restored: false,
        })
    }

    /// Leave the alternate screen and raw mode
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Surface for TermSurface {
    fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn set_cell(&mut self, row: u16, col: u16, cell: Cell) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(col, row),
            SetBackgroundColor(cell.color()),
            Print(' '),
            SetBackgroundColor(Color::Reset)
        )
    }

    fn print(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row), Print(text))
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
