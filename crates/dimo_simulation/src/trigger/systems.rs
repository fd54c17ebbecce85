//! Trigger systems.

use bevy::prelude::*;

use crate::components::{AnimationParams, AnimationSink, CollisionTag, KinematicBody};
use crate::trigger::{GateOutcome, TriggerFired, TriggerGate, VolumeEntered};

/// Система: warning для gate'ов без kinematic body
///
/// Без него хост может не присылать enter-события стабильно.
pub fn warn_missing_kinematic_body(
    gates: Query<(Entity, Option<&Name>), (Added<TriggerGate>, Without<KinematicBody>)>,
) {
    for (entity, name) in gates.iter() {
        crate::log_warning(&format!(
            "{}: add a KinematicBody to the trigger volume for reliable enter detection",
            display_name(entity, name)
        ));
    }
}

/// Система: VolumeEntered → TriggerGate
///
/// 1. Находим gate на volume (нет gate — не наш volume)
/// 2. Tag вошедшего (нет CollisionTag → "Untagged")
/// 3. Animator: явно заданный или AnimationParams самого gate'а
/// 4. TriggerFired + лог на срабатывании
pub fn process_volume_entries(
    mut entries: EventReader<VolumeEntered>,
    mut gates: Query<(&mut TriggerGate, Option<&Name>)>,
    tags: Query<&CollisionTag>,
    mut animators: Query<&mut AnimationParams>,
    mut fired_events: EventWriter<TriggerFired>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for entry in entries.read() {
        let Ok((mut gate, name)) = gates.get_mut(entry.volume) else {
            continue;
        };

        let tag = CollisionTag::of(tags.get(entry.other).ok());
        let animator_entity = gate.animator().unwrap_or(entry.volume);
        let mut animator = animators.get_mut(animator_entity).ok();
        let sink = animator
            .as_deref_mut()
            .map(|params| params as &mut dyn AnimationSink);

        match gate.on_volume_enter(tag, now, sink) {
            GateOutcome::Fired => {
                crate::log_info(&format!(
                    "🚪 [Trigger] {} activated by {:?} ({})",
                    display_name(entry.volume, name),
                    entry.other,
                    tag
                ));
                fired_events.write(TriggerFired {
                    gate: entry.volume,
                    animator: animator_entity,
                    activator: entry.other,
                    parameter: gate.config().trigger_parameter.clone(),
                });
            }
            outcome => {
                crate::log(&format!(
                    "[Trigger] {} ignored {:?}: {:?}",
                    display_name(entry.volume, name),
                    entry.other,
                    outcome
                ));
            }
        }
    }
}

fn display_name(entity: Entity, name: Option<&Name>) -> String {
    match name {
        Some(name) => name.as_str().to_string(),
        None => format!("{:?}", entity),
    }
}
