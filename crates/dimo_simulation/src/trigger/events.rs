//! Trigger события (host collision → ECS, ECS → bridge)

use bevy::prelude::*;

/// Host: `other` вошёл в trigger volume `volume`
#[derive(Event, Debug, Clone, PartialEq)]
pub struct VolumeEntered {
    pub volume: Entity,
    pub other: Entity,
}

/// Gate сработал: trigger выставлен на `animator`
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TriggerFired {
    pub gate: Entity,
    pub animator: Entity,
    pub activator: Entity,
    pub parameter: String,
}
