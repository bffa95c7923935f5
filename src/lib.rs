//! Termpong - two-player Pong for the terminal
//!
//! Core modules:
//! - `sim`: Simulation (paddle/ball physics, collisions, scoring)
//! - `render`: Frame painting onto an abstract character-grid surface
//! - `term`: Crossterm-backed terminal surface
//! - `input`: Non-blocking keyboard polling

pub mod input;
pub mod render;
pub mod sim;
pub mod term;

use rand::Rng;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Paddle height in field rows
    pub const PADDLE_SIZE: f32 = 5.0;
    /// Paddle travel per tick, as a fraction of field height
    pub const PADDLE_SPEED: f32 = 0.008;
    /// Points exchanged on every scoring event (winner +, loser -)
    pub const POINT_VALUE: i32 = 10;
    /// Divisor for the spin a moving paddle imparts on the ball
    pub const SPIN_DIVISOR: f32 = 5.0;

    /// Fixed delay at the end of each tick (constant frame pacing)
    pub const TICK_INTERVAL: Duration = Duration::from_micros(10_000);

    /// Terminal rows reserved outside the field (top border + status area)
    pub const HUD_ROWS: u16 = 5;
    /// Terminal columns reserved outside the field (two border columns per side)
    pub const SIDE_COLS: u16 = 4;

    /// Smallest terminal that leaves a playable field behind the margins
    /// (`height > PADDLE_SIZE`, `width > 4`) and keeps the score line
    /// (`cols / 2 - 5` onward) on screen.
    pub const MIN_COLS: u16 = 12;
    pub const MIN_ROWS: u16 = HUD_ROWS + PADDLE_SIZE as u16 + 1;
}

/// Round half-up for non-negative values: a fractional part of at least
/// 0.5 rounds up.
#[inline]
pub fn round_half_up(x: f32) -> i32 {
    let n = x as i32;
    if x - n as f32 >= 0.5 { n + 1 } else { n }
}

/// Draw +1.0 or -1.0 with equal probability
#[inline]
pub fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random::<bool>() { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.9), 3);
        assert_eq!(round_half_up(7.0), 7);
    }

    #[test]
    fn test_random_sign_is_unit() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..64 {
            let s = random_sign(&mut rng);
            assert!(s == 1.0 || s == -1.0);
        }
    }
}
