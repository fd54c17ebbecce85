//! TriggerGate — одноразовый/cooldown trigger анимации по входу в volume
//!
//! Проверки (в этом порядке):
//! 1. fire_once и уже сработал
//! 2. cooldown с последнего срабатывания не истёк
//! 3. tag вошедшего коллайдера != target_tag
//! 4. нет animator'а (тихий no-op)
//! 5. animator в transition на базовом слое
//!
//! Только если всё прошло — set_trigger + запоминаем время.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AnimationSink, BASE_LAYER};
use crate::config::{ensure_non_negative, ensure_not_empty, ConfigError};

/// Параметры gate'а (двери)
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerGateConfig {
    /// Tag коллайдера, который активирует gate
    pub target_tag: String,
    /// Имя trigger-параметра animator'а
    pub trigger_parameter: String,
    /// Сработать только один раз за жизнь gate'а
    pub fire_once: bool,
    /// Минимум секунд между срабатываниями (≈ длина анимации открытия)
    pub cooldown_secs: f32,
}

impl Default for TriggerGateConfig {
    fn default() -> Self {
        Self {
            target_tag: "Player".to_string(),
            trigger_parameter: "Open".to_string(),
            fire_once: false,
            cooldown_secs: 6.0,
        }
    }
}

impl TriggerGateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_not_empty("target_tag", &self.target_tag)?;
        ensure_not_empty("trigger_parameter", &self.trigger_parameter)?;
        ensure_non_negative("cooldown_secs", self.cooldown_secs)
    }
}

/// Результат обработки enter-события
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateOutcome {
    Fired,
    AlreadyFired,
    CoolingDown { remaining: f32 },
    TagMismatch,
    NoAnimator,
    InTransition,
}

impl GateOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, GateOutcome::Fired)
    }
}

/// Gate на trigger volume
///
/// Инварианты:
/// - не срабатывает, пока не прошло `cooldown_secs` с `last_fire_time`
/// - при `fire_once` не срабатывает второй раз
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct TriggerGate {
    config: TriggerGateConfig,
    /// Entity с AnimationParams (None → animator самого gate'а)
    animator: Option<Entity>,
    has_fired: bool,
    /// None = ещё не срабатывал, cooldown первый раз не блокирует
    last_fire_time: Option<f32>,
}

impl TriggerGate {
    pub fn new(config: TriggerGateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            animator: None,
            has_fired: false,
            last_fire_time: None,
        })
    }

    /// Animator на другой entity (например, дверь — child volume'а)
    pub fn with_animator(mut self, animator: Entity) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn config(&self) -> &TriggerGateConfig {
        &self.config
    }

    pub fn animator(&self) -> Option<Entity> {
        self.animator
    }

    pub fn has_fired(&self) -> bool {
        self.has_fired
    }

    pub fn last_fire_time(&self) -> Option<f32> {
        self.last_fire_time
    }

    /// Сколько секунд cooldown'а осталось (0 если готов)
    pub fn cooldown_remaining(&self, now: f32) -> f32 {
        match self.last_fire_time {
            Some(last) => (self.config.cooldown_secs - (now - last)).max(0.0),
            None => 0.0,
        }
    }

    /// Коллайдер с `tag` вошёл в volume в момент `now` (секунды)
    pub fn on_volume_enter(
        &mut self,
        tag: &str,
        now: f32,
        animator: Option<&mut dyn AnimationSink>,
    ) -> GateOutcome {
        if self.config.fire_once && self.has_fired {
            return GateOutcome::AlreadyFired;
        }

        if let Some(last) = self.last_fire_time {
            if now - last < self.config.cooldown_secs {
                return GateOutcome::CoolingDown {
                    remaining: self.cooldown_remaining(now),
                };
            }
        }

        if tag != self.config.target_tag {
            return GateOutcome::TagMismatch;
        }

        let Some(animator) = animator else {
            return GateOutcome::NoAnimator;
        };

        // Анимация уже в процессе — не перезапускаем
        if animator.is_in_transition(BASE_LAYER) {
            return GateOutcome::InTransition;
        }

        animator.set_trigger(&self.config.trigger_parameter);
        self.has_fired = true;
        self.last_fire_time = Some(now);
        GateOutcome::Fired
    }
}
