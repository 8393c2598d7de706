//! Brick Orbit - Breakout physics and game state for a 3D scene
//!
//! Core modules:
//! - `sim`: Deterministic simulation (boxes, collisions, game state, tick)
//! - `platform`: Host-agnostic session driver and the web binding
//! - `settings`: Motion mode and key bindings

pub mod platform;
pub mod settings;
pub mod sim;

pub use platform::Session;
pub use settings::{KeyBindings, MotionMode, Settings, SettingsError};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Frame rate the per-tick speeds are tuned for
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Largest frame delta honoured in time-scaled mode (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield half-size; walls sit just outside it
    pub const ARENA_HALF_WIDTH: f32 = 10.0;
    pub const ARENA_HALF_HEIGHT: f32 = 5.0;
    pub const WALL_THICKNESS: f32 = 0.5;
    /// Half-depth shared by walls so every body overlaps them on z
    pub const WALL_HALF_DEPTH: f32 = 0.5;

    /// Paddle defaults
    pub const PADDLE_START: Vec3 = Vec3::new(0.0, -4.2, 0.0);
    pub const PADDLE_EXTENTS: Vec3 = Vec3::new(1.2, 0.15, 0.3);
    /// Paddle translation per tick while a direction key is held
    pub const PADDLE_SPEED: f32 = 0.5;

    /// Ball defaults
    pub const BALL_START: Vec3 = Vec3::new(0.0, -3.5, 0.0);
    pub const BALL_EXTENTS: Vec3 = Vec3::new(0.2, 0.2, 0.2);
    /// Ball translation per tick once launched
    pub const BALL_SPEED: f32 = 0.15;

    /// Brick grid layout
    pub const ROWS: usize = 4;
    pub const COLUMNS: usize = 6;
    pub const BRICK_EXTENTS: Vec3 = Vec3::new(0.8, 0.25, 0.25);
    pub const BRICK_SPACING_X: f32 = 2.0;
    pub const BRICK_SPACING_Y: f32 = 0.7;
    pub const BRICK_TOP_ROW_Y: f32 = 3.8;

    /// Ammo tokens, laid out in a row above the top wall
    pub const INIT_AMMO: usize = 3;
    pub const AMMO_TOKEN_EXTENTS: Vec3 = Vec3::new(0.15, 0.15, 0.15);
    pub const AMMO_ORIGIN: Vec3 = Vec3::new(-9.5, 6.0, 0.0);
    pub const AMMO_SPACING: f32 = 0.5;
}

/// Center of the brick at `(row, column)`; row 0 is the top row
#[inline]
pub fn brick_center(row: usize, column: usize) -> Vec3 {
    use consts::*;
    let first_x = -((COLUMNS - 1) as f32) * BRICK_SPACING_X / 2.0;
    Vec3::new(
        first_x + column as f32 * BRICK_SPACING_X,
        BRICK_TOP_ROW_Y - row as f32 * BRICK_SPACING_Y,
        0.0,
    )
}

/// Center of the `index`-th ammo token
#[inline]
pub fn ammo_token_center(index: usize) -> Vec3 {
    use consts::*;
    AMMO_ORIGIN + Vec3::X * (index as f32 * AMMO_SPACING)
}

#[cfg(test)]
mod tests {
    use super::consts::*;
    use super::*;

    #[test]
    fn test_brick_grid_is_centered() {
        let left = brick_center(0, 0);
        let right = brick_center(0, COLUMNS - 1);
        assert!((left.x + right.x).abs() < 1e-5);
        assert!((left.y - BRICK_TOP_ROW_Y).abs() < 1e-5);
    }

    #[test]
    fn test_bricks_fit_inside_arena() {
        let right = brick_center(0, COLUMNS - 1);
        assert!(right.x + BRICK_EXTENTS.x < ARENA_HALF_WIDTH);
        let top = brick_center(0, 0);
        assert!(top.y + BRICK_EXTENTS.y < ARENA_HALF_HEIGHT);
        let bottom = brick_center(ROWS - 1, 0);
        assert!(bottom.y - BRICK_EXTENTS.y > BALL_START.y + BALL_EXTENTS.y);
    }

    #[test]
    fn test_ball_clear_of_paddle_at_serve() {
        let paddle_top = PADDLE_START.y + PADDLE_EXTENTS.y;
        let ball_bottom = BALL_START.y - BALL_EXTENTS.y;
        assert!(ball_bottom > paddle_top);
    }
}
