//! World компоненты: RoomBounds

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ensure_non_negative, ConfigError};

/// Axis-aligned комната (center + полный размер)
///
/// Патрульные точки генерируются только внутри этого бокса.
/// Half-extents = size / 2, границы включительно.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomBounds {
    pub center: Vec3,
    pub size: Vec3,
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            size: Vec3::new(10.0, 8.0, 10.0),
        }
    }
}

impl RoomBounds {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents()
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents()
    }

    /// Точка внутри бокса (границы включительно)
    pub fn contains(&self, point: Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Равномерная случайная точка: независимый draw по каждой оси
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let half = self.half_extents();
        let offset = Vec3::new(
            rng.gen_range(-half.x..=half.x),
            rng.gen_range(-half.y..=half.y),
            rng.gen_range(-half.z..=half.z),
        );
        self.center + offset
    }

    /// size: каждая ось >= 0 и конечная (иначе gen_range паникует)
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("room.size.x", self.size.x)?;
        ensure_non_negative("room.size.y", self.size.y)?;
        ensure_non_negative("room.size.z", self.size.z)?;

        if !self.center.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "room.center",
            });
        }
        Ok(())
    }
}
