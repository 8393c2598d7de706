//! Per-frame simulation tick
//!
//! One call runs the whole fixed sequence: level check, box rebuild,
//! collision response and state transitions, then translation.

use serde::{Deserialize, Serialize};

use super::collision::{self, Contacts};
use super::resolve::{deflect, reflect_off_wall};
use super::state::{GameEvent, GamePhase, GameState, WallSide};
use crate::consts::*;

/// How frame time feeds into motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Fixed translation per tick; `dt` is ignored
    #[default]
    FrameLocked,
    /// Translation scaled by `dt`, matching `FrameLocked` at `REFERENCE_FPS`
    TimeScaled,
}

impl MotionMode {
    /// Multiplier applied to per-tick velocities for a frame of `dt` seconds
    pub fn step_scale(self, dt: f32) -> f32 {
        match self {
            MotionMode::FrameLocked => 1.0,
            MotionMode::TimeScaled => {
                if dt.is_finite() {
                    dt.clamp(0.0, MAX_FRAME_DT) * REFERENCE_FPS
                } else {
                    0.0
                }
            }
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, dt: f32, mode: MotionMode) {
    state.time_ticks += 1;
    state.removed.clear();

    // An empty grid outranks everything else this tick
    if state.bricks.is_empty() {
        next_level(state);
        return;
    }

    // Long frames are split so no pass moves further than a frame-locked tick
    let scale = mode.step_scale(dt);
    let passes = scale.ceil().max(1.0);
    let step = scale / passes;
    for _ in 0..passes as u32 {
        if !advance(state, step) {
            return;
        }
    }
}

/// One detect/resolve/translate pass scaled by `step`.
/// Returns false when a lost ball ended the tick.
fn advance(state: &mut GameState, step: f32) -> bool {
    let contacts = collision::detect(state);

    if state.phase == GamePhase::InPlay {
        if contacts.hit_wall(WallSide::Down) {
            lose_life(state);
            return false;
        }
        resolve_ball(state, &contacts);
    }

    if collision::paddle_can_move(&contacts, state.paddle_vel.x) {
        state.paddle.position.x += state.paddle_vel.x * step;
    }
    state.ball.position += (state.ball_vel * step).extend(0.0);
    true
}

/// Ball response to paddle, side/top walls and bricks, in that order
fn resolve_ball(state: &mut GameState, contacts: &Contacts) {
    let ball_box = state.ball.bounds();

    if contacts.paddle {
        state.ball_vel = deflect(&state.paddle.bounds(), &ball_box, state.ball_vel, BALL_SPEED);
        state.events.push(GameEvent::PaddleHit);
    }

    for &side in &contacts.walls {
        let reflected = reflect_off_wall(state.ball_vel, side);
        if reflected != state.ball_vel {
            state.ball_vel = reflected;
            state.events.push(GameEvent::WallBounce(side));
        }
    }

    // Every overlapping brick counts; the last deflection wins
    for &id in &contacts.bricks {
        let Some(brick) = state.bricks.remove(id) else {
            continue;
        };
        let brick_box = brick.bounds();
        state.removed.push(brick);
        state.score = state.score.saturating_add(1);
        state.ball_vel = deflect(&brick_box, &ball_box, state.ball_vel, BALL_SPEED);
        state.events.push(GameEvent::BrickDestroyed {
            id,
            score: state.score,
        });
        log::debug!(
            "Brick {} destroyed, score {}, {} left",
            id,
            state.score,
            state.bricks.len()
        );
    }
}

/// Grid cleared: new grid and serve, score and ammo carried over
pub fn next_level(state: &mut GameState) {
    state.level += 1;
    state.reset_serve();
    state.regenerate_bricks();
    state.events.push(GameEvent::LevelCleared { level: state.level });
    log::info!("Level {} (score {}, ammo {})", state.level, state.score, state.ammo_count());
}

/// Ball lost off the bottom: spend a life, or hard reset on the last one
pub fn lose_life(state: &mut GameState) {
    if let Some(token) = state.ammo.lose_one() {
        state.removed.push(token);
    }
    state.reset_serve();

    if state.ammo.is_empty() {
        hard_reset(state);
        return;
    }

    let remaining = state.ammo_count();
    state.events.push(GameEvent::LifeLost { remaining });
    log::info!("Ball lost, {} ammo left", remaining);
}

/// Out of lives: full ammo, full grid, zero score, level 1
pub fn hard_reset(state: &mut GameState) {
    let final_score = state.score;
    state.reset_serve();
    state.refill_ammo();
    state.regenerate_bricks();
    state.score = 0;
    state.level = 1;
    state.events.push(GameEvent::HardReset { final_score });
    log::info!("Out of ammo, game reset (final score {})", final_score);
}
