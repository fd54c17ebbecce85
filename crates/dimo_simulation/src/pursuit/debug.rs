//! Debug overlay shapes (диагностика, на поведение не влияют)
//!
//! ECS не рисует сам — bridge/editor читает shapes и рисует wireframe.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugShape {
    WireCube { center: Vec3, size: Vec3, color: DebugColor },
    WireSphere { center: Vec3, radius: f32, color: DebugColor },
}
