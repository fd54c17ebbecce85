//! DIMO Simulation Core
//!
//! Headless ECS-симуляция на Bevy 0.16:
//! - pursuit: летающий hunter (патруль комнаты + погоня за игроком)
//! - trigger: door gate (trigger анимации по входу игрока в volume)
//!
//! Хост (renderer/physics bridge) владеет визуалами и коллизиями:
//! - пишет `Transform` игрока и `VolumeEntered` события
//! - читает `Transform` hunter'ов и `AnimationParams`

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod logger;
pub mod pursuit;
pub mod spawn;
pub mod trigger;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{ConfigError, SimulationConfig};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level, set_logger,
    LogLevel, LogPrinter, LOGGER_LEVEL,
};
pub use pursuit::{PursuitAgent, PursuitConfig, PursuitMode, PursuitModeChanged, PursuitPlugin};
pub use spawn::{spawn_hunter, spawn_player, spawn_trigger_door};
pub use trigger::{GateOutcome, TriggerFired, TriggerGate, TriggerGateConfig, TriggerPlugin, VolumeEntered};

/// Seed по умолчанию
pub const DEFAULT_SEED: u64 = 42;

/// Частота simulation tick'а по умолчанию (Hz)
pub const DEFAULT_TICK_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Не перетираем seed/tick rate, если их уже задал create_headless_app
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app.add_plugins((PursuitPlugin, TriggerPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает вручную: каждый `app.update()` = ровно один FixedUpdate tick
/// (кроме самого первого update, у которого delta = 0).
pub fn create_headless_app(seed: u64) -> App {
    create_headless_app_with_timestep(seed, Duration::from_secs_f64(1.0 / DEFAULT_TICK_HZ))
}

/// Headless App с заданным timestep'ом
///
/// `timestep` должен быть ненулевым (Bevy паникует на нуле) — снаружи
/// берём его только из `SimulationConfig::timestep()`.
pub(crate) fn create_headless_app_with_timestep(seed: u64, timestep: Duration) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(timestep))
        .insert_resource(TimeUpdateStrategy::ManualDuration(timestep));

    app
}

/// App из конфига: валидация → logger → headless app + SimulationPlugin
pub fn create_app_from_config(config: &SimulationConfig) -> Result<App, ConfigError> {
    config.validate()?;
    let timestep = config.timestep()?;
    set_log_level(config.log_level);

    let mut app = create_headless_app_with_timestep(config.seed, timestep);
    app.add_plugins(SimulationPlugin);
    Ok(app)
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
