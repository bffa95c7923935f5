//! Game state and core simulation types
//!
//! The session aggregate (`GameState`) owns every entity; the renderer only
//! ever sees it behind a shared reference.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::random_sign;

/// Which side of the field a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Vertical movement state of a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Still,
    Down,
}

impl Direction {
    /// Movement sign: -1 up, 0 still, +1 down (rows grow downward)
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Still => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// The play field, derived once from the terminal size at startup.
///
/// Precondition (not validated here): `height > PADDLE_SIZE` and
/// `width > 4.0`. Startup checks the terminal is large enough before a
/// `Field` is ever built; the tick math assumes it.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    /// Derive the field from the full terminal size, leaving room for the
    /// border columns and the status area.
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: (cols - SIDE_COLS) as f32,
            height: (rows - HUD_ROWS) as f32,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Vertical offset of the paddle's top edge, in `[0, height - PADDLE_SIZE]`
    pub pos: f32,
    pub dir: Direction,
}

impl Paddle {
    /// Create a paddle centered in the field
    pub fn new(field: &Field) -> Self {
        Self {
            pos: (field.height - PADDLE_SIZE) / 2.0,
            dir: Direction::Still,
        }
    }

    /// True if the paddle's vertical span `[pos, pos + PADDLE_SIZE)` covers `y`
    #[inline]
    pub fn covers(&self, y: f32) -> bool {
        self.pos <= y && self.pos + PADDLE_SIZE > y
    }
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Score tally. Every point moves `POINT_VALUE` from the loser to the
/// winner, so `left + right` stays zero and either side may go negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: i32,
    pub right: i32,
}

impl Score {
    pub fn award(&mut self, winner: Side) {
        match winner {
            Side::Left => {
                self.left += POINT_VALUE;
                self.right -= POINT_VALUE;
            }
            Side::Right => {
                self.right += POINT_VALUE;
                self.left -= POINT_VALUE;
            }
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Session seed, logged at startup
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session: paddles centered, ball served from the
    /// middle with the (slightly faster) opening-serve velocity.
    pub fn new(field: Field, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let vel = Vec2::new(
            (rng.random::<f32>() + 3.0) * field.width / 2500.0 * random_sign(&mut rng),
            (rng.random::<f32>() + 3.0) * field.height / 2000.0 * random_sign(&mut rng),
        );
        Self {
            field,
            left: Paddle::new(&field),
            right: Paddle::new(&field),
            ball: Ball {
                pos: Vec2::new(field.width / 2.0, field.height / 2.0),
                vel,
            },
            score: Score::default(),
            seed,
            time_ticks: 0,
            rng,
        }
    }

    /// Re-serve after a point: ball back to the field center with a fresh
    /// random velocity (independent sign and magnitude per axis).
    pub fn serve(&mut self) {
        self.ball.pos = Vec2::new(self.field.width / 2.0, self.field.height / 2.0);
        self.ball.vel = Vec2::new(
            (self.rng.random::<f32>() + 2.0) * self.field.width / 1500.0
                * random_sign(&mut self.rng),
            (self.rng.random::<f32>() + 2.0) * self.field.height / 1500.0
                * random_sign(&mut self.rng),
        );
    }
}
