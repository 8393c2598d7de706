//! Axis-aligned box geometry for every game entity
//!
//! A box is described by its min and max corners:
//! - built from a center and half-size extents
//! - recomputed from the owning body every tick, never stored

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in scene space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centered on `center` reaching `extents` out along each axis
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        let half = extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Midpoint of the box
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size along each axis
    #[inline]
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Overlap test on all three axes; touching faces count as overlap
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

/// Free-function form of [`Aabb::intersects`]
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}
