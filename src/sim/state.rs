//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`].

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;
use crate::{ammo_token_center, brick_center};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest, waiting for launch input
    #[default]
    Serving,
    /// Ball moving, collisions active
    InPlay,
}

/// Which side of the arena a wall closes off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Up,
    Down,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [WallSide::Left, WallSide::Right, WallSide::Up, WallSide::Down];
}

/// Entity variants known to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ball,
    Paddle,
    Wall(WallSide),
    Brick,
    AmmoToken,
}

/// A rigid body: moving position, fixed half-size extents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub kind: EntityKind,
    pub position: Vec3,
    extents: Vec3,
    /// Drives renderer visibility; false for one tick after removal
    pub alive: bool,
}

impl Body {
    pub fn new(id: u32, kind: EntityKind, position: Vec3, extents: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            extents: extents.abs(),
            alive: true,
        }
    }

    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Bounding box as of the current position
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_extents(self.position, self.extents)
    }
}

/// The four static boundary walls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Walls {
    pub left: Body,
    pub right: Body,
    pub up: Body,
    pub down: Body,
}

impl Walls {
    fn build(next_id: &mut impl FnMut() -> u32) -> Self {
        let side_extents = Vec3::new(
            WALL_THICKNESS / 2.0,
            ARENA_HALF_HEIGHT + WALL_THICKNESS,
            WALL_HALF_DEPTH,
        );
        let cap_extents = Vec3::new(
            ARENA_HALF_WIDTH + WALL_THICKNESS,
            WALL_THICKNESS / 2.0,
            WALL_HALF_DEPTH,
        );
        let side_x = ARENA_HALF_WIDTH + WALL_THICKNESS / 2.0;
        let cap_y = ARENA_HALF_HEIGHT + WALL_THICKNESS / 2.0;

        Self {
            left: Body::new(
                next_id(),
                EntityKind::Wall(WallSide::Left),
                Vec3::new(-side_x, 0.0, 0.0),
                side_extents,
            ),
            right: Body::new(
                next_id(),
                EntityKind::Wall(WallSide::Right),
                Vec3::new(side_x, 0.0, 0.0),
                side_extents,
            ),
            up: Body::new(
                next_id(),
                EntityKind::Wall(WallSide::Up),
                Vec3::new(0.0, cap_y, 0.0),
                cap_extents,
            ),
            down: Body::new(
                next_id(),
                EntityKind::Wall(WallSide::Down),
                Vec3::new(0.0, -cap_y, 0.0),
                cap_extents,
            ),
        }
    }

    pub fn get(&self, side: WallSide) -> &Body {
        match side {
            WallSide::Left => &self.left,
            WallSide::Right => &self.right,
            WallSide::Up => &self.up,
            WallSide::Down => &self.down,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        WallSide::ALL.into_iter().map(|side| self.get(side))
    }
}

/// Destructible bricks, kept in creation (id) order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Body>,
}

impl BrickGrid {
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bricks.iter()
    }

    /// Remove a brick by id; an id that is not present is a no-op
    pub fn remove(&mut self, id: u32) -> Option<Body> {
        let idx = self.bricks.iter().position(|b| b.id == id)?;
        let mut brick = self.bricks.remove(idx);
        brick.alive = false;
        Some(brick)
    }

    /// Empty the grid, handing back what was in it
    fn take_all(&mut self) -> Vec<Body> {
        std::mem::take(&mut self.bricks)
    }

    fn push(&mut self, brick: Body) {
        self.bricks.push(brick);
    }
}

/// Remaining lives, one visible token each
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmmoPool {
    tokens: Vec<Body>,
}

impl AmmoPool {
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.tokens.iter()
    }

    /// Spend one life, removing the token with the highest id.
    /// Returns `None` when the pool is already empty.
    pub fn lose_one(&mut self) -> Option<Body> {
        let idx = self
            .tokens
            .iter()
            .enumerate()
            .max_by_key(|(_, t)| t.id)
            .map(|(i, _)| i)?;
        let mut token = self.tokens.remove(idx);
        token.alive = false;
        Some(token)
    }

    fn clear(&mut self) {
        self.tokens.clear();
    }

    fn push(&mut self, token: Body) {
        self.tokens.push(token);
    }
}

/// Something that happened during a tick, for hosts to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the serve position
    Launched,
    /// Ball deflected off the paddle
    PaddleHit,
    /// Ball reflected off a side or top wall
    WallBounce(WallSide),
    /// Brick removed; `score` is the score after the hit
    BrickDestroyed { id: u32, score: u64 },
    /// Ball reached the bottom wall with lives to spare
    LifeLost { remaining: usize },
    /// Last life spent; score and grid were reset
    HardReset { final_score: u64 },
    /// Grid cleared; `level` is the level now being served
    LevelCleared { level: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Bricks destroyed since the last hard reset
    pub score: u64,
    /// Level number (1-based)
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Body,
    pub paddle: Body,
    pub walls: Walls,
    pub bricks: BrickGrid,
    pub ammo: AmmoPool,
    /// Ball translation per tick
    pub ball_vel: Vec2,
    /// Paddle translation per tick (only x is used)
    pub paddle_vel: Vec2,
    /// Events recorded since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Bodies removed since the last tick began, still reported as hidden
    #[serde(skip)]
    pub removed: Vec<Body>,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: full grid, full ammo, ball and paddle at rest
    pub fn new() -> Self {
        let mut next_id = 1u32;
        let mut alloc = || {
            let id = next_id;
            next_id += 1;
            id
        };

        let ball = Body::new(alloc(), EntityKind::Ball, BALL_START, BALL_EXTENTS);
        let paddle = Body::new(alloc(), EntityKind::Paddle, PADDLE_START, PADDLE_EXTENTS);
        let walls = Walls::build(&mut alloc);

        let mut state = Self {
            phase: GamePhase::Serving,
            score: 0,
            level: 1,
            time_ticks: 0,
            ball,
            paddle,
            walls,
            bricks: BrickGrid::default(),
            ammo: AmmoPool::default(),
            ball_vel: Vec2::ZERO,
            paddle_vel: Vec2::ZERO,
            events: Vec::new(),
            removed: Vec::new(),
            next_id,
        };

        state.regenerate_bricks();
        state.refill_ammo();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the grid with a full `ROWS x COLUMNS` set under fresh ids
    pub fn regenerate_bricks(&mut self) {
        for mut brick in self.bricks.take_all() {
            brick.alive = false;
            self.removed.push(brick);
        }
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let id = self.next_entity_id();
                self.bricks.push(Body::new(
                    id,
                    EntityKind::Brick,
                    brick_center(row, column),
                    BRICK_EXTENTS,
                ));
            }
        }
    }

    /// Restore the pool to `INIT_AMMO` tokens
    pub fn refill_ammo(&mut self) {
        self.ammo.clear();
        for i in 0..INIT_AMMO {
            let id = self.next_entity_id();
            self.ammo.push(Body::new(
                id,
                EntityKind::AmmoToken,
                ammo_token_center(i),
                AMMO_TOKEN_EXTENTS,
            ));
        }
    }

    /// Put ball and paddle back on their marks, at rest, awaiting launch
    pub fn reset_serve(&mut self) {
        self.ball.position = BALL_START;
        self.paddle.position = PADDLE_START;
        self.ball_vel = Vec2::ZERO;
        self.paddle_vel = Vec2::ZERO;
        self.phase = GamePhase::Serving;
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current ball speed (per tick)
    pub fn ball_speed(&self) -> f32 {
        self.ball_vel.length()
    }

    /// Lives remaining
    pub fn ammo_count(&self) -> usize {
        self.ammo.count()
    }

    /// Every body the renderer should know about, in id order per group.
    /// Bodies removed this tick come last with `alive == false`.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        std::iter::once(&self.ball)
            .chain(std::iter::once(&self.paddle))
            .chain(self.walls.iter())
            .chain(self.bricks.iter())
            .chain(self.ammo.iter())
            .chain(self.removed.iter())
    }
}
