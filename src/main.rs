//! Termpong entry point
//!
//! Acquires the terminal, then runs the fixed-interval frame loop:
//! poll input, advance the simulation one tick, paint the frame, sleep.

use std::io;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use termpong::consts::TICK_INTERVAL;
use termpong::render::Surface;
use termpong::sim::{Field, GameState, tick};
use termpong::term::TermSurface;
use termpong::{input, render};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("termpong: {err}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let mut surface = TermSurface::acquire()?;
    let (cols, rows) = surface.size();
    let field = Field::from_terminal(cols, rows);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(field, seed);
    log::info!(
        "session start: seed {seed}, field {}x{}",
        field.width,
        field.height
    );

    loop {
        let frame = input::poll()?;

        if let Some(winner) = tick(&mut state, &frame.tick) {
            log::info!(
                "point to {winner:?} (score {} : {})",
                state.score.left,
                state.score.right
            );
        }

        render::draw(&state, &mut surface)?;

        // Constant pacing; the speed constants assume this exact delay
        thread::sleep(TICK_INTERVAL);

        // The frame always completes before the exit key ends the session
        if frame.quit {
            break;
        }
    }

    surface.restore()?;
    log::info!(
        "session end after {} ticks (score {} : {})",
        state.time_ticks,
        state.score.left,
        state.score.right
    );
    Ok(())
}
