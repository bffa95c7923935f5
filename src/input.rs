//! Keyboard input mapping
//!
//! Non-blocking: at most one key event is consumed per tick, and a tick
//! with no pending input is the common case, not an error.
//!
//! Key map: `w`/`s` steer the left paddle, the arrow keys steer the right
//! one, Home quits. Ctrl+C also quits because raw mode swallows the
//! signal.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::sim::{PaddleKey, TickInput};

/// Everything the loop needs from one input poll
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub tick: TickInput,
    pub quit: bool,
}

/// Poll for one pending key event without blocking.
pub fn poll() -> io::Result<FrameInput> {
    let mut input = FrameInput::default();

    if !event::poll(Duration::ZERO)? {
        return Ok(input);
    }
    let Event::Key(key) = event::read()? else {
        return Ok(input);
    };
    // Key releases would double-toggle on platforms that report them
    if key.kind != KeyEventKind::Press {
        return Ok(input);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        input.quit = true;
        return Ok(input);
    }

    match key.code {
        KeyCode::Home => input.quit = true,
        KeyCode::Char('w') => input.tick.left = Some(PaddleKey::Up),
        KeyCode::Char('s') => input.tick.left = Some(PaddleKey::Down),
        KeyCode::Up => input.tick.right = Some(PaddleKey::Up),
        KeyCode::Down => input.tick.right = Some(PaddleKey::Down),
        _ => {}
    }

    Ok(input)
}
