//! Headless симуляция DIMO
//!
//! Игрок идёт через дверь мимо комнаты hunter'а; лог показывает смену
//! режимов hunter'а и срабатывания двери.
//!
//! Usage: dimo_simulation [config.json]

use bevy::prelude::*;
use dimo_simulation::{
    create_app_from_config, spawn_hunter, spawn_player, spawn_trigger_door, PursuitAgent,
    SimulationConfig, TriggerGate, VolumeEntered,
};

/// Радиус trigger volume двери (host-side коллизия в демо)
const DOOR_VOLUME_RADIUS: f32 = 1.5;
/// Скорость игрока (м/с)
const PLAYER_SPEED: f32 = 3.0;
const TICKS: u32 = 1200;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(path),
        None => Ok(SimulationConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid config: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("Simulation failed: {}", err);
        std::process::exit(1);
    }
}

fn run(config: &SimulationConfig) -> Result<(), dimo_simulation::ConfigError> {
    dimo_simulation::log_info(&format!(
        "Starting DIMO headless simulation (seed: {})",
        config.seed
    ));

    let mut app = create_app_from_config(config)?;
    let world = app.world_mut();

    let hunter = spawn_hunter(world, Transform::from_xyz(0.0, 2.0, 0.0), config.hunter.clone())?;
    let door_position = Vec3::new(0.0, 0.0, 25.0);
    let door = spawn_trigger_door(world, Transform::from_translation(door_position), config.door.clone())?;
    let player = spawn_player(world, Vec3::new(0.0, 0.0, 45.0));

    let step = PLAYER_SPEED / config.tick_hz as f32;
    let mut inside_door = false;

    for tick in 0..TICKS {
        // Игрок идёт к центру комнаты по -Z
        let player_position = {
            let world = app.world_mut();
            let Some(mut transform) = world.get_mut::<Transform>(player) else {
                break;
            };
            if transform.translation.z > 0.0 {
                transform.translation.z -= step;
            }
            transform.translation
        };

        // Host-side trigger volume: событие только на входе
        let inside = player_position.distance(door_position) < DOOR_VOLUME_RADIUS;
        if inside && !inside_door {
            app.world_mut().send_event(VolumeEntered {
                volume: door,
                other: player,
            });
        }
        inside_door = inside;

        app.update();

        if tick % 120 == 0 {
            let world = app.world();
            if let (Some(agent), Some(transform)) =
                (world.get::<PursuitAgent>(hunter), world.get::<Transform>(hunter))
            {
                dimo_simulation::log_info(&format!(
                    "Tick {}: hunter {:?} at {:.2?}, player at {:.2?}",
                    tick,
                    agent.mode(),
                    transform.translation,
                    player_position
                ));
            }
        }
    }

    let door_fired = app
        .world()
        .get::<TriggerGate>(door)
        .is_some_and(TriggerGate::has_fired);
    dimo_simulation::log_info(&format!(
        "Simulation complete! Door fired: {}",
        door_fired
    ));
    Ok(())
}
