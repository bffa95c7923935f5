//! Fixed timestep simulation tick
//!
//! Advances one frame of paddle motion, ball motion, collision resolution
//! and scoring. The loop calls this exactly once per frame.

use crate::consts::*;
use crate::sim::state::{Direction, GameState, Paddle, Side};

/// Up/down key for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    Up,
    Down,
}

/// Key events observed this tick (at most one per paddle)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: Option<PaddleKey>,
    pub right: Option<PaddleKey>,
}

impl Paddle {
    /// Toggle-pair key semantics: a key that opposes the current movement
    /// stops the paddle; any other press starts movement in the key's
    /// direction. Every observed press toggles, with no debouncing.
    pub fn apply_key(&mut self, key: PaddleKey) {
        self.dir = match (key, self.dir) {
            (PaddleKey::Up, Direction::Down) => Direction::Still,
            (PaddleKey::Up, _) => Direction::Up,
            (PaddleKey::Down, Direction::Up) => Direction::Still,
            (PaddleKey::Down, _) => Direction::Down,
        };
    }
}

/// Advance the game state by one tick. Returns the side that won a point
/// this tick, if the rally ended.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<Side> {
    state.time_ticks += 1;

    if let Some(key) = input.left {
        state.left.apply_key(key);
    }
    if let Some(key) = input.right {
        state.right.apply_key(key);
    }

    let height = state.field.height;
    let width = state.field.width;

    // Paddle motion: a fixed fraction of the field height per tick
    state.left.pos += state.left.dir.signum() * PADDLE_SPEED * height;
    state.right.pos += state.right.dir.signum() * PADDLE_SPEED * height;

    // Hard stop at the walls. Clamping also stops the paddle, so a held
    // key does not resume motion until toggled again.
    clamp_paddle(&mut state.left, height);
    clamp_paddle(&mut state.right, height);

    // Ball motion. The velocity is applied twice, so the effective
    // displacement per tick is double the configured velocity. The speed
    // constants are tuned against this; do not collapse it to one step.
    state.ball.pos += state.ball.vel;
    state.ball.pos += state.ball.vel;

    // Top/bottom walls: elastic reflection
    if state.ball.pos.y < 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = -state.ball.vel.y;
    } else if state.ball.pos.y > height - 1.0 {
        state.ball.pos.y = height - 1.0;
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Goal lines, left side first. A hit reflects the ball and adds spin
    // from the paddle's own movement; a miss scores and re-serves.
    if state.ball.pos.x < 2.0 {
        if state.left.covers(state.ball.pos.y) {
            state.ball.pos.x = 2.0;
            state.ball.vel.x = -state.ball.vel.x;
            state.ball.vel.y += state.left.dir.signum() * PADDLE_SPEED * height / SPIN_DIVISOR;
        } else {
            state.score.award(Side::Right);
            state.serve();
            return Some(Side::Right);
        }
    } else if state.ball.pos.x > width - 4.0 {
        if state.right.covers(state.ball.pos.y) {
            state.ball.pos.x = width - 4.0;
            state.ball.vel.x = -state.ball.vel.x;
            state.ball.vel.y += state.right.dir.signum() * PADDLE_SPEED * height / SPIN_DIVISOR;
        } else {
            state.score.award(Side::Left);
            state.serve();
            return Some(Side::Left);
        }
    }

    None
}

fn clamp_paddle(paddle: &mut Paddle, height: f32) {
    if paddle.pos < 0.0 {
        paddle.pos = 0.0;
        paddle.dir = Direction::Still;
    } else if paddle.pos > height - PADDLE_SIZE {
        paddle.pos = height - PADDLE_SIZE;
        paddle.dir = Direction::Still;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Field;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(
            Field {
                width: 40.0,
                height: 20.0,
            },
            12345,
        )
    }

    #[test]
    fn test_toggle_table() {
        // All direction/key combinations, per the toggle-pair semantics
        let cases = [
            (Direction::Still, PaddleKey::Up, Direction::Up),
            (Direction::Up, PaddleKey::Up, Direction::Up),
            (Direction::Down, PaddleKey::Up, Direction::Still),
            (Direction::Still, PaddleKey::Down, Direction::Down),
            (Direction::Down, PaddleKey::Down, Direction::Down),
            (Direction::Up, PaddleKey::Down, Direction::Still),
        ];
        for (dir, key, expected) in cases {
            let mut paddle = Paddle { pos: 0.0, dir };
            paddle.apply_key(key);
            assert_eq!(paddle.dir, expected, "{dir:?} + {key:?}");
        }
    }

    #[test]
    fn test_paddle_moves_and_clamps_at_top() {
        let mut state = state();
        state.left.pos = 0.05;
        state.left.dir = Direction::Up;
        tick(&mut state, &TickInput::default());
        // 0.05 - 0.008 * 20 < 0, so the paddle snaps to the wall and stops
        assert_eq!(state.left.pos, 0.0);
        assert_eq!(state.left.dir, Direction::Still);

        // Still clamped on the next tick: no drift without a new toggle
        tick(&mut state, &TickInput::default());
        assert_eq!(state.left.pos, 0.0);
    }

    #[test]
    fn test_paddle_clamps_at_bottom() {
        let mut state = state();
        state.right.pos = 14.9;
        state.right.dir = Direction::Down;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.right.pos, 20.0 - PADDLE_SIZE);
        assert_eq!(state.right.dir, Direction::Still);
    }

    #[test]
    fn test_ball_displacement_is_doubled() {
        let mut state = state();
        state.ball.pos = Vec2::new(20.0, 10.0);
        state.ball.vel = Vec2::new(0.5, 0.25);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos, Vec2::new(21.0, 10.5));
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = state();
        // Exactly on the bottom row and still heading down
        state.ball.pos = Vec2::new(20.0, 19.0);
        state.ball.vel = Vec2::new(0.1, 0.3);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos.y, 19.0);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = state();
        state.ball.pos = Vec2::new(20.0, 0.2);
        state.ball.vel = Vec2::new(0.1, -0.3);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos.y, 0.0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_left_miss_scores_and_reserves() {
        let mut state = state();
        state.left.pos = 0.0;
        state.left.dir = Direction::Still;
        state.ball.pos = Vec2::new(1.0, 10.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);
        let winner = tick(&mut state, &TickInput::default());
        // Paddle spans [0, 5), ball at y=10: a miss
        assert_eq!(winner, Some(Side::Right));
        assert_eq!((state.score.left, state.score.right), (-10, 10));
        assert_eq!(state.ball.pos, Vec2::new(20.0, 10.0));
        assert!(state.ball.pos.x >= 2.0);
    }

    #[test]
    fn test_left_paddle_return() {
        let mut state = state();
        state.left.pos = 8.0;
        state.ball.pos = Vec2::new(2.5, 10.0);
        state.ball.vel = Vec2::new(-0.5, 0.0);
        let winner = tick(&mut state, &TickInput::default());
        assert_eq!(winner, None);
        assert_eq!(state.ball.pos.x, 2.0);
        assert!(state.ball.vel.x > 0.0);
        assert_eq!((state.score.left, state.score.right), (0, 0));
    }

    #[test]
    fn test_right_miss_scores_for_left() {
        let mut state = state();
        state.right.pos = 0.0;
        state.ball.pos = Vec2::new(38.0, 12.0);
        state.ball.vel = Vec2::new(0.5, 0.0);
        let winner = tick(&mut state, &TickInput::default());
        assert_eq!(winner, Some(Side::Left));
        assert_eq!((state.score.left, state.score.right), (10, -10));
        assert_eq!(state.ball.pos, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_spin_from_moving_paddle() {
        // Identical right-paddle hits; one with the paddle moving up.
        // The moving paddle must strictly lower the outgoing vy.
        let hit_vy = |dir: Direction| {
            let mut state = state();
            state.right.pos = 8.0;
            state.right.dir = dir;
            state.ball.pos = Vec2::new(35.5, 10.0);
            state.ball.vel = Vec2::new(0.5, 0.1);
            let winner = tick(&mut state, &TickInput::default());
            assert_eq!(winner, None);
            state.ball.vel.y
        };
        // Paddle at 8.0 with dir=Up moves to 7.84 before the hit; both
        // spans still cover y=10.2, so the contact itself is identical.
        let still = hit_vy(Direction::Still);
        let moving_up = hit_vy(Direction::Up);
        assert!(moving_up < still);
    }

    #[test]
    fn test_scores_stay_zero_sum_over_a_session() {
        let mut state = state();
        for i in 0..5000 {
            let input = TickInput {
                left: (i % 97 == 0).then_some(PaddleKey::Up),
                right: (i % 131 == 0).then_some(PaddleKey::Down),
            };
            tick(&mut state, &input);
            assert_eq!(state.score.left + state.score.right, 0);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = state();
        let mut b = state();
        for _ in 0..1000 {
            tick(&mut a, &TickInput::default());
            tick(&mut b, &TickInput::default());
        }
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(
            (a.score.left, a.score.right),
            (b.score.left, b.score.right)
        );
    }
}
