//! Spawn helpers (hunter, player, trigger door)
//!
//! Конфиги валидируются здесь — невалидный конфиг не попадает в World.

use bevy::prelude::*;

use crate::components::{AnimationParams, CollisionTag, KinematicBody, Player};
use crate::config::ConfigError;
use crate::pursuit::{PursuitAgent, PursuitConfig};
use crate::trigger::{TriggerGate, TriggerGateConfig};
use crate::{DeterministicRng, DEFAULT_SEED};

/// Spawn hunter'а: первая патрульная точка берётся из DeterministicRng
pub fn spawn_hunter(
    world: &mut World,
    transform: Transform,
    config: PursuitConfig,
) -> Result<Entity, ConfigError> {
    let agent = {
        let mut rng = world.get_resource_or_insert_with(|| DeterministicRng::new(DEFAULT_SEED));
        PursuitAgent::new(config, &mut rng.rng)?
    };

    let entity = world
        .spawn((
            Name::new("Dimo"),
            agent,
            transform,
            AnimationParams::default(),
        ))
        .id();

    crate::log(&format!(
        "Spawned hunter {:?} at {:?}",
        entity, transform.translation
    ));
    Ok(entity)
}

/// Spawn игрока (Player marker + "Player" tag)
pub fn spawn_player(world: &mut World, position: Vec3) -> Entity {
    world
        .spawn((
            Name::new("Player"),
            Player,
            CollisionTag::player(),
            Transform::from_translation(position),
        ))
        .id()
}

/// Spawn двери: trigger volume + свой animator + kinematic body
pub fn spawn_trigger_door(
    world: &mut World,
    transform: Transform,
    config: TriggerGateConfig,
) -> Result<Entity, ConfigError> {
    let gate = TriggerGate::new(config)?;

    let entity = world
        .spawn((
            Name::new("Door"),
            gate,
            transform,
            AnimationParams::default(),
            KinematicBody,
        ))
        .id();
    Ok(entity)
}
