//! Per-tick системы hunter'а.

use bevy::prelude::*;

use crate::components::{AnimationParams, Player};
use crate::pursuit::{PursuitAgent, PursuitModeChanged};
use crate::DeterministicRng;

/// Система: начальные параметры animator'а для новых hunter'ов
///
/// OnGround = false, Move = 2 (полёт).
/// AnimationParams может появиться позже agent'а — ловим оба Added.
pub fn init_pursuit_animation(
    mut agents: Query<
        (&PursuitAgent, &mut AnimationParams),
        Or<(Added<PursuitAgent>, Added<AnimationParams>)>,
    >,
) {
    for (agent, mut anim) in agents.iter_mut() {
        agent.write_initial_animation(&mut *anim);
    }
}

/// Система: pursuit tick
///
/// 1. Позиция игрока (единственный `Player`)
/// 2. PursuitAgent::tick — режим, поворот, движение
/// 3. Attack/Pitch → AnimationParams
/// 4. PursuitModeChanged на смене режима
pub fn pursuit_tick(
    mut agents: Query<
        (Entity, &mut PursuitAgent, &mut Transform, Option<&mut AnimationParams>),
        Without<Player>,
    >,
    players: Query<&Transform, With<Player>>,
    mut rng: ResMut<DeterministicRng>,
    mut mode_events: EventWriter<PursuitModeChanged>,
    time: Res<Time<Fixed>>,
) {
    // Нет игрока (или их несколько) — hunter'ы стоят
    let Ok(player_transform) = players.single() else {
        return;
    };
    let player_position = player_transform.translation;
    let delta = time.delta_secs();
    let rng = &mut rng.rng;

    for (entity, mut agent, mut transform, anim) in agents.iter_mut() {
        let previous_mode = agent.mode();
        let output = agent.tick(&mut transform, player_position, delta, rng);

        if let Some(mut anim) = anim {
            PursuitAgent::write_animation(&output, &mut *anim);
        }

        if output.mode != previous_mode {
            crate::log_info(&format!(
                "🦖 Hunter {:?}: {:?} → {:?} (target {:?})",
                entity,
                previous_mode,
                output.mode,
                agent.current_target()
            ));
            mode_events.write(PursuitModeChanged {
                agent: entity,
                mode: output.mode,
            });
        }

        if output.resampled {
            crate::log(&format!(
                "Hunter {:?}: new patrol point {:?}",
                entity,
                agent.current_target()
            ));
        }
    }
}
