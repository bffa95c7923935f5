//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or terminal dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, Direction, Field, GameState, Paddle, Score, Side};
pub use tick::{PaddleKey, TickInput, tick};
