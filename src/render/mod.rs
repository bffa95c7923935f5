//! Frame painting
//!
//! The renderer is a stateless full-frame draw over a read-only game state.
//! It talks to the terminal only through the [`Surface`] trait, so the
//! simulation never touches drawing primitives and tests can paint into an
//! in-memory grid.

use std::io;

use crate::consts::*;
use crate::round_half_up;
use crate::sim::GameState;

/// The fixed palette of colored cells a frame is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Border,
    Paddle,
    Ball,
}

/// A character-grid display surface.
///
/// One implementation drives the real terminal (`term::TermSurface`); tests
/// use an in-memory grid.
pub trait Surface {
    /// Current size as (cols, rows)
    fn size(&self) -> (u16, u16);
    /// Wipe the whole surface
    fn clear(&mut self) -> io::Result<()>;
    /// Paint one colored cell
    fn set_cell(&mut self, row: u16, col: u16, cell: Cell) -> io::Result<()>;
    /// Write plain text starting at a position
    fn print(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;
    /// Commit the frame
    fn present(&mut self) -> io::Result<()>;
}

/// Paint one frame: border, paddles, ball, score line.
pub fn draw<S: Surface>(state: &GameState, surface: &mut S) -> io::Result<()> {
    let field_height = state.field.height as u16;
    let cols = state.field.width as u16 + SIDE_COLS;
    let rows = field_height + HUD_ROWS;

    surface.clear()?;

    // Frame: full-width bars above and below the field, two columns of
    // wall on each side
    for col in 0..cols {
        surface.set_cell(0, col, Cell::Border)?;
        surface.set_cell(field_height + 1, col, Cell::Border)?;
    }
    for i in 0..field_height {
        surface.set_cell(1 + i, 0, Cell::Border)?;
        surface.set_cell(1 + i, 1, Cell::Border)?;
        surface.set_cell(1 + i, cols - 2, Cell::Border)?;
        surface.set_cell(1 + i, cols - 1, Cell::Border)?;
    }

    // Paddles: filled vertical run of PADDLE_SIZE rows at the rounded
    // position, left column 3 and right column cols-4
    let left_top = round_half_up(state.left.pos) as u16;
    let right_top = round_half_up(state.right.pos) as u16;
    for i in 0..field_height {
        if i >= left_top && i < left_top + PADDLE_SIZE as u16 {
            surface.set_cell(1 + i, 3, Cell::Paddle)?;
        }
        if i >= right_top && i < right_top + PADDLE_SIZE as u16 {
            surface.set_cell(1 + i, cols - 4, Cell::Paddle)?;
        }
    }

    // Ball: two cells wide so it looks square in a terminal font
    let ball_row = round_half_up(state.ball.pos.y) as u16 + 1;
    let ball_col = round_half_up(state.ball.pos.x) as u16 + 2;
    surface.set_cell(ball_row, ball_col, Cell::Ball)?;
    surface.set_cell(ball_row, ball_col + 1, Cell::Ball)?;

    // Score line
    surface.print(rows - 2, cols / 2 - 5, "SCORE")?;
    surface.print(rows - 2, cols / 4 - 1, &state.score.left.to_string())?;
    surface.print(rows - 2, cols / 4 * 3 - 1, &state.score.right.to_string())?;

    surface.present()
}
