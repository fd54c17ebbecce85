//! Pursuit module — hunter, который патрулирует комнату и гонится за игроком
//!
//! Core логика (`PursuitAgent`) не зависит от App: Transform, RNG и
//! animation sink передаются явно. ECS системы только связывают core
//! с компонентами и ресурсами.

use bevy::prelude::*;

pub mod components;
pub mod debug;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::{PursuitAgent, PursuitConfig, PursuitMode, PursuitOutput};
pub use debug::{DebugColor, DebugShape};
pub use events::PursuitModeChanged;

/// Pursuit Plugin
///
/// Регистрирует системы в FixedUpdate.
/// Порядок выполнения:
/// 1. init_pursuit_animation — OnGround/Move для новых hunter'ов
/// 2. pursuit_tick — режим, движение, Attack/Pitch
pub struct PursuitPlugin;

impl Plugin for PursuitPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PursuitAgent>()
            .add_event::<PursuitModeChanged>()
            .add_systems(
                FixedUpdate,
                (systems::init_pursuit_animation, systems::pursuit_tick).chain(),
            );
    }
}
