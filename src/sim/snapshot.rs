//! Read-only view of the game handed to the renderer after each tick

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::{Body, EntityKind, GamePhase, GameState};

/// One entity as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub position: Vec3,
    pub extents: Vec3,
    pub visible: bool,
}

impl From<&Body> for EntityView {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            kind: body.kind,
            position: body.position,
            extents: body.extents(),
            visible: body.alive,
        }
    }
}

/// Everything needed to draw a frame and its HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub ammo: usize,
    pub level: u32,
    pub entities: Vec<EntityView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            score: state.score,
            ammo: state.ammo_count(),
            level: state.level,
            entities: state.bodies().map(EntityView::from).collect(),
        }
    }

    pub fn find(&self, id: u32) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Visible entities of `kind`
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities
            .iter()
            .filter(|e| e.visible && e.kind == kind)
            .count()
    }
}
