//! Тесты детерминизма
//!
//! Одинаковый seed → идентичные траектории hunter'ов.

use bevy::prelude::*;
use dimo_simulation::*;

const TICK_COUNT: usize = 1000;

/// Запускает симуляцию и возвращает snapshot Transform'ов
fn run_simulation(seed: u64, hunter_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    for i in 0..hunter_count {
        spawn_hunter(
            app.world_mut(),
            Transform::from_xyz(i as f32 * 0.5, 0.0, 0.0),
            PursuitConfig::default(),
        )
        .unwrap();
    }
    // Игрок далеко — чистый патруль, всё движение от RNG
    spawn_player(app.world_mut(), Vec3::new(300.0, 0.0, 0.0));

    for _ in 0..TICK_COUNT {
        app.update();
    }

    world_snapshot::<Transform>(app.world_mut())
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    let snapshot1 = run_simulation(SEED, 5);
    let snapshot2 = run_simulation(SEED, 5);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_different_seeds_diverge() {
    let snapshot1 = run_simulation(1, 3);
    let snapshot2 = run_simulation(2, 3);

    assert_ne!(snapshot1, snapshot2);
}

#[test]
fn test_app_from_config() {
    let config = SimulationConfig::from_json_str(r#"{ "seed": 99, "tick_hz": 30.0 }"#).unwrap();
    let app = create_app_from_config(&config).unwrap();

    assert_eq!(app.world().resource::<DeterministicRng>().seed, 99);
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    assert!((timestep.as_secs_f64() - 1.0 / 30.0).abs() < 1e-6);
}

#[test]
fn test_app_from_config_rejects_extreme_tick_rate() {
    for tick_hz in [1e10, 1e-25] {
        let config = SimulationConfig {
            tick_hz,
            ..Default::default()
        };
        assert!(matches!(
            create_app_from_config(&config),
            Err(ConfigError::TickRate { .. })
        ));
    }
}
