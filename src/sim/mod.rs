//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick motion only, no wall-clock reads
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod input;
pub mod resolve;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, intersects};
pub use collision::{Contacts, detect};
pub use input::{InputEvent, Key, KeyPhase, apply_input, launch};
pub use resolve::{deflect, launch_velocity, reflect_off_wall};
pub use snapshot::{EntityView, Snapshot};
pub use state::{
    AmmoPool, Body, BrickGrid, EntityKind, GameEvent, GamePhase, GameState, WallSide, Walls,
};
pub use tick::{MotionMode, hard_reset, lose_life, next_level, tick};
