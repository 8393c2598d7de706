//! Ball velocity after a collision
//!
//! Paddle and brick hits steer the ball away from the obstacle's center, so
//! an off-center paddle hit sends it out at an angle. Walls reflect one axis.
//! Speed is the same before and after every response.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::WallSide;
use crate::consts::BALL_SPEED;

/// Serve direction, scaled to `BALL_SPEED`
pub fn launch_velocity() -> Vec2 {
    Vec2::new(1.0, -1.0).normalize() * BALL_SPEED
}

/// Point the ball from the obstacle's center through its own center
///
/// Keeps the current heading when the two centers coincide.
pub fn deflect(obstacle: &Aabb, ball: &Aabb, current: Vec2, speed: f32) -> Vec2 {
    let away = (ball.center() - obstacle.center()).truncate();
    match away.try_normalize() {
        Some(dir) => dir * speed,
        None => current.normalize_or_zero() * speed,
    }
}

/// Reflect off a side or top wall
///
/// The reflected component always ends up pointing back into the arena, so a
/// ball still overlapping the wall on the next tick is not flipped back out.
/// The bottom wall never reflects.
pub fn reflect_off_wall(vel: Vec2, side: WallSide) -> Vec2 {
    match side {
        WallSide::Left => Vec2::new(vel.x.abs(), vel.y),
        WallSide::Right => Vec2::new(-vel.x.abs(), vel.y),
        WallSide::Up => Vec2::new(vel.x, -vel.y.abs()),
        WallSide::Down => vel,
    }
}
