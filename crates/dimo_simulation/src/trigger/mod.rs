//! Trigger module — door gate, срабатывающий на вход игрока в volume
//!
//! Host (physics bridge) пишет `VolumeEntered`, gate решает — выставлять
//! ли trigger анимации. Bridge читает trigger из `AnimationParams`.

use bevy::prelude::*;

pub mod events;
pub mod gate;
pub mod systems;


// Re-export основных типов
pub use events::{TriggerFired, VolumeEntered};
pub use gate::{GateOutcome, TriggerGate, TriggerGateConfig};

/// Trigger Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. warn_missing_kinematic_body — одноразовый warning для новых gate'ов
/// 2. process_volume_entries — VolumeEntered → TriggerGate → TriggerFired
pub struct TriggerPlugin;

impl Plugin for TriggerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TriggerGate>()
            .add_event::<VolumeEntered>()
            .add_event::<TriggerFired>()
            .add_systems(
                FixedUpdate,
                (
                    systems::warn_missing_kinematic_body,
                    systems::process_volume_entries,
                )
                    .chain(),
            );
    }
}
