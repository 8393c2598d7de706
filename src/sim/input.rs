//! Keyboard intent to velocity mapping
//!
//! Events are applied the moment they arrive; the next tick reads whatever
//! velocities they left behind.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::resolve::launch_velocity;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::PADDLE_SPEED;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Launch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyPhase {
    Down,
    Up,
}

/// A single key transition delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub key: Key,
    pub phase: KeyPhase,
}

impl InputEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            phase: KeyPhase::Down,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            phase: KeyPhase::Up,
        }
    }
}

/// Apply one input event to the paddle or ball velocity
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    match (event.key, event.phase) {
        (Key::Left, KeyPhase::Down) => state.paddle_vel = Vec2::new(-PADDLE_SPEED, 0.0),
        (Key::Right, KeyPhase::Down) => state.paddle_vel = Vec2::new(PADDLE_SPEED, 0.0),
        // Only release the direction that is actually held
        (Key::Left, KeyPhase::Up) => {
            if state.paddle_vel.x < 0.0 {
                state.paddle_vel = Vec2::ZERO;
            }
        }
        (Key::Right, KeyPhase::Up) => {
            if state.paddle_vel.x > 0.0 {
                state.paddle_vel = Vec2::ZERO;
            }
        }
        (Key::Launch, KeyPhase::Down) => launch(state),
        (Key::Launch, KeyPhase::Up) => {}
    }
}

/// Serve the ball; ignored unless it is at rest
pub fn launch(state: &mut GameState) {
    if state.phase != GamePhase::Serving || state.ball_vel != Vec2::ZERO {
        return;
    }
    state.ball_vel = launch_velocity();
    state.phase = GamePhase::InPlay;
    state.events.push(GameEvent::Launched);
    log::debug!("Ball launched at tick {}", state.time_ticks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_SPEED;

    #[test]
    fn test_direction_keys_set_velocity() {
        let mut state = GameState::new();
        apply_input(&mut state, InputEvent::down(Key::Left));
        assert_eq!(state.paddle_vel, Vec2::new(-PADDLE_SPEED, 0.0));
        apply_input(&mut state, InputEvent::down(Key::Right));
        assert_eq!(state.paddle_vel, Vec2::new(PADDLE_SPEED, 0.0));
        apply_input(&mut state, InputEvent::up(Key::Right));
        assert_eq!(state.paddle_vel, Vec2::ZERO);
    }

    #[test]
    fn test_stale_key_up_is_ignored() {
        let mut state = GameState::new();
        apply_input(&mut state, InputEvent::down(Key::Left));
        apply_input(&mut state, InputEvent::down(Key::Right));
        // Left released after right was pressed
        apply_input(&mut state, InputEvent::up(Key::Left));
        assert_eq!(state.paddle_vel, Vec2::new(PADDLE_SPEED, 0.0));
    }

    #[test]
    fn test_launch_from_serve() {
        let mut state = GameState::new();
        apply_input(&mut state, InputEvent::down(Key::Launch));
        assert_eq!(state.phase, GamePhase::InPlay);
        assert!((state.ball_speed() - BALL_SPEED).abs() < 1e-6);
        assert_eq!(state.ball_vel, launch_velocity());
        assert_eq!(state.events, vec![GameEvent::Launched]);
    }

    #[test]
    fn test_second_launch_is_noop() {
        let mut state = GameState::new();
        apply_input(&mut state, InputEvent::down(Key::Launch));
        state.ball_vel = Vec2::new(0.0, BALL_SPEED);
        apply_input(&mut state, InputEvent::up(Key::Launch));
        apply_input(&mut state, InputEvent::down(Key::Launch));
        assert_eq!(state.ball_vel, Vec2::new(0.0, BALL_SPEED));
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_launch_does_not_touch_paddle() {
        let mut state = GameState::new();
        apply_input(&mut state, InputEvent::down(Key::Left));
        apply_input(&mut state, InputEvent::down(Key::Launch));
        assert_eq!(state.paddle_vel, Vec2::new(-PADDLE_SPEED, 0.0));
    }
}
