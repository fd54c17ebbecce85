//! Pursuit agent (hunter): патруль внутри комнаты + погоня за игроком.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{params, AnimationSink, RoomBounds, FLIGHT_MOVE_MODE};
use crate::config::{ensure_non_negative, ensure_positive, ConfigError};
use crate::pursuit::debug::{DebugColor, DebugShape};

/// Множитель высоты цели → pitch (голова/корпус вверх-вниз)
const PITCH_PER_UNIT_HEIGHT: f32 = 0.1;

/// Режим hunter'а (пересчитывается каждый tick от дистанции до игрока)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum PursuitMode {
    /// Летим к случайной точке внутри комнаты
    #[default]
    Patrol,
    /// Летим к текущей позиции игрока
    Chase,
}

/// Параметры hunter'а
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitConfig {
    /// Дистанция обнаружения игрока (strict <)
    pub sight_range: f32,
    /// Дистанция, на которой включается атака
    pub attack_range: f32,
    /// Комната — домен для патрульных точек
    pub room: RoomBounds,
    /// Скорость патруля (м/с)
    pub patrol_speed: f32,
    /// Скорость погони (м/с)
    pub chase_speed: f32,
    /// Скорость поворота (slerp factor per second)
    pub turn_speed: f32,
    /// Радиус "прибыли" в патрульную точку
    pub arrival_radius: f32,
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self {
            sight_range: 15.0,
            attack_range: 2.0,
            room: RoomBounds::default(),
            patrol_speed: 4.0,
            chase_speed: 8.0, // В 2 раза быстрее патруля
            turn_speed: 2.0,
            arrival_radius: 2.0,
        }
    }
}

impl PursuitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("sight_range", self.sight_range)?;
        ensure_positive("attack_range", self.attack_range)?;
        ensure_positive("arrival_radius", self.arrival_radius)?;
        ensure_non_negative("patrol_speed", self.patrol_speed)?;
        ensure_non_negative("chase_speed", self.chase_speed)?;
        ensure_non_negative("turn_speed", self.turn_speed)?;
        self.room.validate()
    }

    pub fn speed_for(&self, mode: PursuitMode) -> f32 {
        match mode {
            PursuitMode::Patrol => self.patrol_speed,
            PursuitMode::Chase => self.chase_speed,
        }
    }
}

/// Результат одного tick'а (для анимации и логов)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitOutput {
    pub mode: PursuitMode,
    /// Chase И цель ближе attack_range
    pub attacking: bool,
    /// [-1, 1], отрицательный — цель выше
    pub pitch: f32,
    /// В этом tick'е сгенерирована новая патрульная точка
    pub resampled: bool,
}

/// Hunter: владеет целью и режимом, Transform мутирует в `tick`
///
/// Инвариант: в Patrol `current_target` всегда внутри `config.room`.
/// В Chase цель = позиция игрока без clamp'а — если игрок вне комнаты,
/// hunter вылетит за ним.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct PursuitAgent {
    config: PursuitConfig,
    mode: PursuitMode,
    current_target: Vec3,
}

impl PursuitAgent {
    /// Валидирует конфиг и сэмплирует первую патрульную точку
    pub fn new<R: Rng + ?Sized>(config: PursuitConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let current_target = config.room.sample_point(rng);

        Ok(Self {
            config,
            mode: PursuitMode::Patrol,
            current_target,
        })
    }

    pub fn config(&self) -> &PursuitConfig {
        &self.config
    }

    pub fn mode(&self) -> PursuitMode {
        self.mode
    }

    pub fn is_chasing(&self) -> bool {
        self.mode == PursuitMode::Chase
    }

    pub fn current_target(&self) -> Vec3 {
        self.current_target
    }

    /// Один tick: выбор режима → поворот/движение → анимационные выходы
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        transform: &mut Transform,
        player_position: Vec3,
        delta: f32,
        rng: &mut R,
    ) -> PursuitOutput {
        let resampled = self.select_mode(transform.translation, player_position, rng);
        self.steer(transform, delta);

        // Выходы считаем ПОСЛЕ движения
        let to_target = self.current_target - transform.translation;
        let attacking = self.is_chasing() && to_target.length() < self.config.attack_range;
        let pitch = (-to_target.y * PITCH_PER_UNIT_HEIGHT).clamp(-1.0, 1.0);

        PursuitOutput {
            mode: self.mode,
            attacking,
            pitch,
            resampled,
        }
    }

    /// Выбор режима. Возвращает true если сгенерирована новая патрульная точка.
    fn select_mode<R: Rng + ?Sized>(&mut self, position: Vec3, player_position: Vec3, rng: &mut R) -> bool {
        if position.distance(player_position) < self.config.sight_range {
            self.mode = PursuitMode::Chase;
            self.current_target = player_position;
            return false;
        }

        // Вышли из погони: старая цель (позиция игрока) может быть вне комнаты,
        // но новая точка сэмплируется только по прибытии
        self.mode = PursuitMode::Patrol;
        if position.distance(self.current_target) < self.config.arrival_radius {
            self.current_target = self.config.room.sample_point(rng);
            return true;
        }
        false
    }

    /// Slerp к look rotation + движение вдоль текущего forward
    fn steer(&self, transform: &mut Transform, delta: f32) {
        let direction = (self.current_target - transform.translation).normalize_or_zero();

        if direction != Vec3::ZERO {
            let look_rotation = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;
            let factor = (delta * self.config.turn_speed).clamp(0.0, 1.0);
            transform.rotation = transform.rotation.slerp(look_rotation, factor);
        }

        let speed = self.config.speed_for(self.mode);
        let forward = transform.forward().as_vec3();
        transform.translation += forward * speed * delta;
    }

    /// Начальные параметры animator'а: hunter всегда в воздухе
    pub fn write_initial_animation(&self, sink: &mut dyn AnimationSink) {
        sink.set_bool(params::ON_GROUND, false);
        sink.set_integer(params::MOVE, FLIGHT_MOVE_MODE);
    }

    /// Per-tick параметры animator'а
    pub fn write_animation(output: &PursuitOutput, sink: &mut dyn AnimationSink) {
        sink.set_bool(params::ATTACK, output.attacking);
        sink.set_float(params::PITCH, output.pitch);
    }

    /// Debug overlay: комната (красный бокс) + sight range (жёлтая сфера)
    pub fn debug_shapes(&self, position: Vec3) -> [DebugShape; 2] {
        [
            DebugShape::WireCube {
                center: self.config.room.center,
                size: self.config.room.size,
                color: DebugColor::Red,
            },
            DebugShape::WireSphere {
                center: position,
                radius: self.config.sight_range,
                color: DebugColor::Yellow,
            },
        ]
    }
}
