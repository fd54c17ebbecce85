//! Player marker + collision classification

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Hunter'ы преследуют единственного `Player` в мире.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Tag коллайдера (классификация для trigger volumes)
///
/// Entity без этого компонента считается `"Untagged"`.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CollisionTag(pub String);

impl CollisionTag {
    pub const UNTAGGED: &'static str = "Untagged";
    pub const PLAYER: &'static str = "Player";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn player() -> Self {
        Self::new(Self::PLAYER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tag entity (или "Untagged" если компонента нет)
    pub fn of(tag: Option<&Self>) -> &str {
        tag.map_or(Self::UNTAGGED, Self::as_str)
    }
}

/// Marker: trigger volume имеет kinematic body
///
/// Без него хост может пропускать enter-события у статичных volumes —
/// при спавне gate без этого marker'а пишем warning.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct KinematicBody;
